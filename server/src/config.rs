use error_stack::ResultExt;
use kernel::KernelError;

const HOST: &str = "BOOKSHELF_HOST";
const PORT: &str = "BOOKSHELF_PORT";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    /// Reads the bind address from the environment, `.env` included.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let host = dotenvy::var(HOST).unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = match dotenvy::var(PORT) {
            Ok(port) => Self::parse_port(&port)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn parse_port(port: &str) -> error_stack::Result<u16, KernelError> {
        port.parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{PORT} is not a valid port: {port}"))
    }
}
