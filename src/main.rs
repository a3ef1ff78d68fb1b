use clap::Parser;
use dotenv::dotenv;
use log::error;
use o1action::{ActionConfig, ActionInput, CompletionInvoker};

/// Send one prompt to an OpenAI o1/gpt-4o model and print the reply.
/// No conversation history is kept.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args
{   /// Prompt for the model
    prompt: String
  , /// Model: "o1-mini", "o1-preview" or "gpt-4o"
    #[arg(short, long)]
    model: Option<String>
  , /// API key (defaults to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>
  , /// API base URL (defaults to OPENAI_BASE_URL or the OpenAI endpoint)
    #[arg(long)]
    api_base: Option<String>
}

#[tokio::main]
async fn main() -> std::process::ExitCode
{   dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = ActionConfig::from_env();

    let invoker = CompletionInvoker::with_api_base(
      args.api_base.unwrap_or_else(|| config.api_base.clone())
    );
    let input = ActionInput
    {   prompt: args.prompt
      , model: args.model
      , api_key: args.api_key.map(Into::into)
    };

    match invoker.invoke_input(input, &config).await
    {   Ok(result) => match serde_json::to_string(&result)
        {   Ok(json) => {
              println!("{}", json);
              std::process::ExitCode::SUCCESS
            }
          , Err(e) => {
              error!("Failed to encode result: {}", e);
              std::process::ExitCode::FAILURE
            }
        }
      , Err(e) => {
          eprintln!("{}", e);
          std::process::ExitCode::FAILURE
        }
    }
}
