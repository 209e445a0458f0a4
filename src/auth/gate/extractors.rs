//! actix-web extractors running the gate before a handler

use super::decision::PermissionSpec;
use crate::auth::context::RequestParts;
use crate::auth::identity::Identity;
use crate::auth::jwt::extract_bearer_token;
use crate::server::state::AppState;
use crate::services::DatasetRecord;
use crate::utils::error::GatewayError;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web::{self, Bytes};
use actix_web::{FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use std::marker::PhantomData;

/// Bearer token from the `Authorization` header
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::to_string)
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, GatewayError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| GatewayError::internal("Application state is not registered"))
}

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl CurrentIdentity {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl std::ops::Deref for CurrentIdentity {
    type Target = Identity;

    fn deref(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for CurrentIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let token = bearer_token(req);
        Box::pin(async move {
            let identity = state?.gate.resolve_identity(token.as_deref()).await?;
            Ok(CurrentIdentity(identity))
        })
    }
}

/// A statically declared permission requirement
pub trait PermissionRule {
    const RESOURCE: &'static str;
    const ZONE: &'static str;
    const OPERATION: &'static str;

    fn spec() -> PermissionSpec {
        PermissionSpec::new(Self::RESOURCE, Self::ZONE, Self::OPERATION)
    }
}

/// Caller cleared for rule `P`, plus the buffered request body
pub struct Authorized<P> {
    pub identity: Identity,
    pub body: Bytes,
    _rule: PhantomData<P>,
}

impl<P> std::fmt::Debug for Authorized<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorized")
            .field("identity", &self.identity)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl<P: PermissionRule + 'static> FromRequest for Authorized<P> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let body = Bytes::from_request(&req, payload);
        Box::pin(async move {
            let body = body.await?;
            let state = app_state(&req)?;
            let parts = RequestParts::from_actix(&req, &body);
            let token = bearer_token(&req);
            let identity = state
                .gate
                .require_permission(&parts, token.as_deref(), &P::spec())
                .await?;
            Ok(Authorized {
                identity,
                body,
                _rule: PhantomData,
            })
        })
    }
}

/// Caller cleared to act on the dataset the request names
#[derive(Debug)]
pub struct DatasetAccess {
    pub identity: Identity,
    pub dataset: DatasetRecord,
    pub body: Bytes,
}

impl FromRequest for DatasetAccess {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let body = Bytes::from_request(&req, payload);
        Box::pin(async move {
            let body = body.await?;
            let state = app_state(&req)?;
            let parts = RequestParts::from_actix(&req, &body);
            let token = bearer_token(&req);
            let (identity, dataset) = state
                .gate
                .require_dataset_access(&parts, token.as_deref())
                .await?;
            Ok(DatasetAccess {
                identity,
                dataset,
                body,
            })
        })
    }
}
