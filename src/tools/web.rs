use crate::tools::error::Error::CantCreateClient;
use crate::tools::error::Result;
use crate::tools::log_message_and_return;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by both steps of the flow.
pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        // `resetPassword` is matched to its code through the session cookie set by `forgotPassword`
        .cookie_store(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(log_message_and_return(
            "Can't build reset flow HTTP client",
            CantCreateClient,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_exists, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn should_build_client() {
        assert!(build_client().is_ok());
    }

    #[tokio::test]
    async fn should_send_session_cookie_back() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("cookie", "PHPSESSID=abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(header_exists("user-agent"))
            .respond_with(
                ResponseTemplate::new(200).append_header("set-cookie", "PHPSESSID=abc; Path=/"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = build_client().unwrap();

        client.post(mock_server.uri()).send().await.unwrap();
        let response = client.get(mock_server.uri()).send().await.unwrap();

        assert_eq!(200, response.status().as_u16());
    }
}
