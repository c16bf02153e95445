//! Authentication middleware

use super::helpers::authorize;
use crate::server::extract::AuthPayload;
use crate::token::TokenMaker;
use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bearer-token gate for Actix-web
///
/// Requests that pass carry an [`AuthPayload`] in their extensions; all
/// others are answered with 401 before reaching the wrapped service.
#[derive(Clone)]
pub struct AuthMiddleware {
    maker: Arc<dyn TokenMaker>,
}

impl AuthMiddleware {
    pub fn new(maker: Arc<dyn TokenMaker>) -> Self {
        Self { maker }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            maker: self.maker.clone(),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
    maker: Arc<dyn TokenMaker>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(req.headers(), self.maker.as_ref()) {
            Ok(payload) => {
                debug!("Request authorized for subject: {}", payload.subject());
                req.extensions_mut().insert(AuthPayload::new(payload));
                Box::pin(self.service.call(req))
            }
            Err(e) => {
                warn!("Rejected request to {} ({}): {}", req.path(), e.code(), e);
                let err = actix_web::Error::from(e);
                Box::pin(async move { Err(err) })
            }
        }
    }
}
