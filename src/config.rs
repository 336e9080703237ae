// src/config.rs

use std::env;

use thiserror::Error;

/// Configuração do processo, lida das variáveis de ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuracao {
    /// Sem URL o serviço sobe com o store em memória.
    pub database_url: Option<String>,
    pub host: String,
    pub porta: u16,
}

#[derive(Debug, Error)]
#[error("valor inválido para {variavel}: {valor:?}")]
pub struct ErroConfiguracao {
    pub variavel: &'static str,
    pub valor: String,
}

impl Configuracao {
    /// Lê a configuração do ambiente, carregando antes um `.env` se existir.
    pub fn do_ambiente() -> Result<Self, ErroConfiguracao> {
        // O .env é opcional
        let _ = dotenvy::dotenv();
        Self::a_partir_de(|chave| env::var(chave).ok())
    }

    fn a_partir_de(ler: impl Fn(&str) -> Option<String>) -> Result<Self, ErroConfiguracao> {
        let database_url = ler("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let host = ler("INVENTARIO_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let porta = match ler("INVENTARIO_PORTA") {
            Some(valor) => valor.parse().map_err(|_| ErroConfiguracao {
                variavel: "INVENTARIO_PORTA",
                valor,
            })?,
            None => 8080,
        };

        Ok(Configuracao { database_url, host, porta })
    }
}
