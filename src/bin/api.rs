use chatbridge::api::handler::function_handler;
use chatbridge::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    chatbridge::setup_logging();

    // Config is read once here and shared by reference across invocations;
    // handlers never reach into the environment themselves.
    let config = &AppConfig::from_env().map_err(lambda_runtime::Error::from)?;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        function_handler(event, config)
    }))
    .await
}
