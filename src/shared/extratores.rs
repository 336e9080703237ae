// src/shared/extratores.rs

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use super::erros::ErroApi;
use super::validacao::ErroValidacao;

/// Id do recurso lido do segmento `{id}` do caminho.
///
/// Todas as rotas identificam o recurso pelo caminho (`/api/produto/{id}`).
/// Ids não numéricos ou menores que 1 são rejeitados com 400 antes de
/// chegar ao serviço.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRecurso(pub i32);

impl FromRequest for IdRecurso {
    type Error = ErroApi;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let bruto = match req.match_info().get("id") {
            Some(valor) => valor,
            None => return ready(Err(ErroValidacao::new("id", "id ausente no caminho").into())),
        };

        let resultado = match bruto.parse::<i32>() {
            Ok(id) if id >= 1 => Ok(IdRecurso(id)),
            Ok(_) => Err(ErroValidacao::new("id", "id deve ser maior que zero").into()),
            Err(_) => Err(ErroValidacao::new("id", "id deve ser um número inteiro").into()),
        };

        ready(resultado)
    }
}
