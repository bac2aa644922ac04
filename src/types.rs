pub use crate::utils::database;
use crate::{
    modules::hello::{repository::PgHelloMapper, service::HelloService},
    utils::config::Config,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub hello: HelloService,
}

impl Context {
    pub fn new(app: AppContext, hello: HelloService) -> Self {
        Self { app, hello }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        let hello = HelloService::new(Arc::new(PgHelloMapper::new(db_conn.pool)));

        Ok(Context::new(
            AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            hello,
        ))
    }
}
