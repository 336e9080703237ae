// src/shared/validacao.rs

//! Validação dos payloads recebidos, aplicada antes de qualquer escrita no store.
//!
//! Cada recurso descreve seus campos com uma lista de [`Campo`]. A validação
//! percorre os campos na ordem declarada e para no primeiro campo inválido.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Tipo primitivo esperado para um campo do payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tipo {
    /// Texto não vazio (espaços em branco não contam).
    Texto,
    /// Número inteiro que caiba em `i32`.
    Inteiro,
    /// Qualquer número JSON (inteiro ou com casas decimais).
    Decimal,
    /// Id de outro recurso: inteiro `>= 1`.
    Referencia,
}

/// Especificação de um campo do payload.
#[derive(Debug, Clone, Copy)]
pub struct Campo {
    pub nome: &'static str,
    pub obrigatorio: bool,
    pub tipo: Tipo,
    pub nao_negativo: bool,
}

impl Campo {
    pub const fn texto(nome: &'static str) -> Self {
        Campo { nome, obrigatorio: true, tipo: Tipo::Texto, nao_negativo: false }
    }

    pub const fn inteiro(nome: &'static str) -> Self {
        Campo { nome, obrigatorio: true, tipo: Tipo::Inteiro, nao_negativo: false }
    }

    pub const fn decimal(nome: &'static str) -> Self {
        Campo { nome, obrigatorio: true, tipo: Tipo::Decimal, nao_negativo: false }
    }

    pub const fn referencia(nome: &'static str) -> Self {
        Campo { nome, obrigatorio: true, tipo: Tipo::Referencia, nao_negativo: false }
    }

    /// O campo pode ser omitido (ou enviado como `null`).
    pub const fn opcional(self) -> Self {
        Campo { obrigatorio: false, ..self }
    }

    /// Rejeita valores numéricos negativos.
    pub const fn nao_negativo(self) -> Self {
        Campo { nao_negativo: true, ..self }
    }
}

/// Erro de validação, sempre nomeando o primeiro campo com problema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("campo '{campo}' inválido: {motivo}")]
pub struct ErroValidacao {
    pub campo: String,
    pub motivo: String,
}

impl ErroValidacao {
    pub fn new(campo: impl Into<String>, motivo: impl Into<String>) -> Self {
        ErroValidacao {
            campo: campo.into(),
            motivo: motivo.into(),
        }
    }
}

/// Valida `payload` contra a lista de campos.
pub fn validar(payload: &Value, campos: &[Campo]) -> Result<(), ErroValidacao> {
    let objeto = payload
        .as_object()
        .ok_or_else(|| ErroValidacao::new("corpo", "esperado um objeto JSON"))?;

    for campo in campos {
        match objeto.get(campo.nome) {
            None | Some(Value::Null) => {
                if campo.obrigatorio {
                    return Err(ErroValidacao::new(campo.nome, "campo obrigatório ausente"));
                }
            }
            Some(valor) => validar_valor(campo, valor)?,
        }
    }

    Ok(())
}

fn validar_valor(campo: &Campo, valor: &Value) -> Result<(), ErroValidacao> {
    match campo.tipo {
        Tipo::Texto => {
            let texto = valor
                .as_str()
                .ok_or_else(|| ErroValidacao::new(campo.nome, "esperado um texto"))?;
            if texto.trim().is_empty() {
                return Err(ErroValidacao::new(campo.nome, "não pode ser vazio"));
            }
        }
        Tipo::Inteiro | Tipo::Referencia => {
            let numero = valor
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| ErroValidacao::new(campo.nome, "esperado um número inteiro"))?;
            if campo.tipo == Tipo::Referencia && numero < 1 {
                return Err(ErroValidacao::new(campo.nome, "id deve ser maior que zero"));
            }
            if campo.nao_negativo && numero < 0 {
                return Err(ErroValidacao::new(campo.nome, "não pode ser negativo"));
            }
        }
        Tipo::Decimal => {
            let numero = valor
                .as_f64()
                .ok_or_else(|| ErroValidacao::new(campo.nome, "esperado um número"))?;
            if campo.nao_negativo && numero < 0.0 {
                return Err(ErroValidacao::new(campo.nome, "não pode ser negativo"));
            }
        }
    }

    Ok(())
}

/// Valida o payload e o converte na struct tipada do recurso.
pub fn extrair<T: DeserializeOwned>(payload: Value, campos: &[Campo]) -> Result<T, ErroValidacao> {
    validar(&payload, campos)?;
    serde_json::from_value(payload).map_err(|e| ErroValidacao::new("corpo", e.to_string()))
}
