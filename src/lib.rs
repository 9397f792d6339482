use std::{error::Error, future::Future, pin::Pin};

use axum::routing::{get, post};
use axum::Router;
use axum_server::bind;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use app_state::AppState;
use domain::UserRole;
use middleware::{api_key_auth, jwt_auth, params_check, role_authorize, RoleGate};
use routes::{admin_token, monitor, profile, refresh, signin, signout, signup};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    // /admin-token: any authenticated caller holding the admin role.
    let admin_token_routes = Router::new()
        .route("/admin-token", get(admin_token::generate_admin_token))
        .route_layer(axum::middleware::from_fn_with_state(
            RoleGate::new(app_state.clone(), vec![UserRole::Admin.role_id()]),
            role_authorize,
        ))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            jwt_auth,
        ));

    // /:user_id: callers can only read their own profile.
    let profile_routes = Router::new()
        .route("/:user_id", get(profile::get_profile))
        .route_layer(axum::middleware::from_fn(params_check))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            jwt_auth,
        ));

    // /signup-admin: machine-to-machine callers only.
    let admin_signup_routes = Router::new()
        .route("/signup-admin", post(signup::signup_admin))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            api_key_auth,
        ));

    let users = Router::new()
        .route("/signup", post(signup::signup_customer))
        .route("/signin", post(signin::signin))
        .route("/refresh", post(refresh::refresh_passport))
        .route("/signout", post(signout::signout))
        .merge(admin_signup_routes)
        .merge(admin_token_routes)
        .merge(profile_routes);

    let api = Router::new()
        .route("/", get(monitor::health_check))
        .nest("/users", users);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

pub async fn get_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
