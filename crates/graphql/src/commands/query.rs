use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_client::CallOptions;
use libgraphql_client::Client;
use libgraphql_client::ClientConfig;
use libgraphql_client::ClientError;
use libgraphql_client::DecodeMode;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(
        env="GRAPHQL_ENDPOINT",
        help="URL of the GraphQL endpoint to POST the document to.",
        long,
    )]
    endpoint: String,

    #[arg(
        help="Extra request header, written as `Name: value`. May be \
             repeated.",
        long="header",
        short='H',
        value_parser=parse_header,
    )]
    headers: Vec<(String, String)>,

    #[arg(
        help="Seconds to wait for a response before giving up.",
        long,
    )]
    timeout_secs: Option<u64>,

    #[arg(
        help="Variable binding, written as `name=<json>`. Values that are \
             not valid JSON are sent as strings. May be repeated.",
        long="var",
        value_parser=parse_variable,
    )]
    variables: Vec<(String, serde_json::Value)>,

    #[arg(
        help="Path to a file containing the GraphQL document to send, or `-` \
             to read it from stdin.",
        name="DOCUMENT_PATH",
    )]
    document_path: PathBuf,
}
impl QueryCmd {
    fn read_document(&self) -> std::io::Result<String> {
        if self.document_path.as_os_str() == "-" {
            let mut document = String::new();
            std::io::stdin().read_to_string(&mut document)?;
            Ok(document)
        } else {
            std::fs::read_to_string(&self.document_path)
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let document = match self.read_document() {
            Ok(document) => document,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {:?}: {e}",
                output_utils::RED_X,
                self.document_path,
            )),
        };

        let mut config = match ClientConfig::parse(&self.endpoint) {
            Ok(config) => config,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Invalid endpoint `{}`: {e}",
                output_utils::RED_X,
                self.endpoint,
            )),
        };
        for (name, value) in self.headers {
            config = config.with_header(name, value);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(timeout_secs));
        }

        let client = match Client::new(config) {
            Ok(client) => client,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to construct an HTTP client: {e}",
                output_utils::RED_X,
            )),
        };

        let variables: serde_json::Map<String, serde_json::Value> =
            self.variables.into_iter().collect();
        log::debug!(
            "Sending document with {} variable(s) to {}.",
            variables.len(),
            client.config().endpoint(),
        );

        let mut data = serde_json::Value::Null;
        let result = client.execute_document(
            &document,
            &mut data,
            &variables,
            DecodeMode::Replace,
            &CallOptions::new(),
        ).await;

        match result {
            Ok(()) => CommandResult::stdout(format_args!("{}", pretty(&data))),

            Err(ClientError::Protocol(errors)) => {
                let messages: Vec<String> =
                    errors.iter()
                        .map(|error| format!("  * {error}"))
                        .collect();
                let failure = CommandResult::stderr(format_args!(
                    "{} The server returned {} error(s):\n{}",
                    output_utils::RED_X,
                    errors.len(),
                    messages.join("\n"),
                ));
                if data.is_null() {
                    failure
                } else {
                    failure.with_stdout(pretty(&data))
                }
            },

            Err(e) => CommandResult::stderr(format_args!(
                "{} Request failed: {e}",
                output_utils::RED_X,
            )),
        }
    }
}

fn pretty(data: &serde_json::Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

pub(crate) fn parse_header(arg: &str) -> Result<(String, String), String> {
    let Some((name, value)) = arg.split_once(':') else {
        return Err(format!("expected `Name: value`, got `{arg}`"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name missing in `{arg}`"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub(crate) fn parse_variable(arg: &str) -> Result<(String, serde_json::Value), String> {
    let Some((name, raw_value)) = arg.split_once('=') else {
        return Err(format!("expected `name=<json>`, got `{arg}`"));
    };
    let name = name.trim().trim_start_matches('$');
    if name.is_empty() {
        return Err(format!("variable name missing in `{arg}`"));
    }
    let value =
        serde_json::from_str(raw_value)
            .unwrap_or_else(|_| serde_json::Value::String(raw_value.to_string()));
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::parse_header;
    use super::parse_variable;
    use serde_json::json;

    #[test]
    fn headers_split_on_the_first_colon() {
        assert_eq!(
            parse_header("Authorization: bearer abc:def"),
            Ok(("Authorization".to_string(), "bearer abc:def".to_string())),
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn variables_parse_as_json_with_string_fallback() {
        assert_eq!(parse_variable("first=10"), Ok(("first".to_string(), json!(10))));
        assert_eq!(
            parse_variable("$labels=[\"bug\"]"),
            Ok(("labels".to_string(), json!(["bug"]))),
        );
        assert_eq!(
            parse_variable("login=octocat"),
            Ok(("login".to_string(), json!("octocat"))),
        );
        assert!(parse_variable("missing-equals").is_err());
    }
}
