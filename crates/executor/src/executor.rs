//! Command dispatch.

use crate::command::Command;
use crate::output::{Output, Response};
use crate::request::Request;
use jsondb_core::Result;
use jsondb_engine::{Config, Registry};
use jsondb_storage::{blocking, nonblocking};
use std::sync::Arc;
use tracing::debug;

/// Executes commands against a registry and an option store.
///
/// The executor holds no state of its own; everything it changes lives in
/// the [`Registry`], the [`Config`], or on disk.
#[derive(Debug, Clone)]
pub struct Executor {
    registry: Arc<Registry>,
    config: Arc<Config>,
}

impl Executor {
    pub fn new(registry: Arc<Registry>, config: Arc<Config>) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Execute with blocking I/O.
    pub fn execute(&self, command: Command) -> Response {
        let action = command.action();
        debug!(action = %action, write = action.is_write(), "executing command");
        let result = Request::try_from(command).and_then(|request| self.run(request));
        log_failure(Response::new(action, result))
    }

    /// Execute with async I/O. Results match [`Executor::execute`].
    pub async fn execute_async(&self, command: Command) -> Response {
        let action = command.action();
        debug!(action = %action, write = action.is_write(), "executing command");
        let result = match Request::try_from(command) {
            Ok(request) => self.run_async(request).await,
            Err(e) => Err(e),
        };
        log_failure(Response::new(action, result))
    }

    fn run(&self, request: Request) -> Result<Output> {
        let output = match request {
            Request::Read { path } => Output::Document(blocking::read(path)?),
            Request::Get {
                path,
                shape,
                address,
            } => Output::Item(blocking::get(path, shape, &address)?),
            Request::Add { path, shape, value } => Output::Added(blocking::add(path, shape, value)?),
            Request::Set {
                path,
                shape,
                address,
                value,
            } => Output::Assigned(blocking::set(path, shape, address, value)?),
            Request::Remove {
                path,
                shape,
                address,
            } => Output::Removed(blocking::remove(path, shape, address)?),
            Request::Register {
                folder,
                shape,
                name,
            } => Output::Registered(self.registry.register(folder, shape, name.as_deref())?),
            Request::GetById { id } => Output::Database(self.registry.get_by_id(&id)?),
            Request::GetByName { name } => Output::Databases(self.registry.get_by_name(&name)?),
            Request::IsFolder { folder } => Output::Bool(blocking::is_folder(folder)?),
            Request::ReadEnv { path } => Output::Env(blocking::read_env_file(path)?),
            Request::Configure { options } => Output::Config(self.config.configure(options)?),
        };
        Ok(output)
    }

    async fn run_async(&self, request: Request) -> Result<Output> {
        let output = match request {
            Request::Read { path } => Output::Document(nonblocking::read(path).await?),
            Request::Get {
                path,
                shape,
                address,
            } => Output::Item(nonblocking::get(path, shape, &address).await?),
            Request::Add { path, shape, value } => {
                Output::Added(nonblocking::add(path, shape, value).await?)
            }
            Request::Set {
                path,
                shape,
                address,
                value,
            } => Output::Assigned(nonblocking::set(path, shape, address, value).await?),
            Request::Remove {
                path,
                shape,
                address,
            } => Output::Removed(nonblocking::remove(path, shape, address).await?),
            Request::Register {
                folder,
                shape,
                name,
            } => Output::Registered(self.registry.register(folder, shape, name.as_deref())?),
            Request::GetById { id } => {
                Output::Database(self.registry.get_by_id_async(&id).await?)
            }
            Request::GetByName { name } => {
                Output::Databases(self.registry.get_by_name_async(&name).await?)
            }
            Request::IsFolder { folder } => Output::Bool(nonblocking::is_folder(folder).await?),
            Request::ReadEnv { path } => Output::Env(nonblocking::read_env_file(path).await?),
            Request::Configure { options } => Output::Config(self.config.configure(options)?),
        };
        Ok(output)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Arc::new(Registry::new()), Arc::new(Config::new()))
    }
}

fn log_failure(response: Response) -> Response {
    if let Some(e) = response.err() {
        debug!(action = %response.action, code = e.code(), error = %e, "command failed");
    }
    response
}
