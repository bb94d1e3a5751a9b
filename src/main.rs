use sample_app::{Error, SampleServer, ServerConfig};

fn main() -> Result<(), Error> {
    #[cfg(feature = "env_logger")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = SampleServer::bind(ServerConfig::default())?;
    server.run()
}
