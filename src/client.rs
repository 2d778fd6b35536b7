use crate::error::IncreaseError;
use crate::pagination::{Page, Paginated};
use crate::query;
use crate::requester::{ApiRequest, HttpRequester, Method, Requester};
use crate::resources::{
    AccountNumbers, AccountTransfers, Accounts, AchTransfers, Cards, CheckTransfers,
    DeclinedTransactions, PendingTransactions, Simulations, Transactions, WireTransfers,
};
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const API_KEY_VAR: &str = "INCREASE_API_KEY";
pub const ENVIRONMENT_VAR: &str = "INCREASE_ENVIRONMENT";
pub const BASE_URL_VAR: &str = "INCREASE_BASE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.increase.com",
            Environment::Sandbox => "https://sandbox.increase.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        };
        f.write_str(v)
    }
}

impl FromStr for Environment {
    type Err = IncreaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(IncreaseError::Environment(format!(
                "unknown environment `{other}`, expected `production` or `sandbox`"
            ))),
        }
    }
}

/// Entry point to the Increase API. Resource services are borrowed from the
/// client, e.g. `client.accounts().retrieve("account_in71c4amph0vgo2qllky")`.
#[derive(Debug, Clone)]
pub struct Client<R = HttpRequester> {
    requester: R,
}

impl Client<HttpRequester> {
    /// Create a new client against the production environment.
    pub fn new(api_key: impl Into<String>) -> Result<Self, IncreaseError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(IncreaseError::MissingApiKey);
        }
        let requester = HttpRequester::new(
            api_key,
            Environment::Production.base_url(),
            DEFAULT_TIMEOUT,
        )?;

        info!("Initialized Increase API client with default base URL");
        Ok(Self { requester })
    }

    /// Create a client from `INCREASE_API_KEY`, with optional
    /// `INCREASE_ENVIRONMENT` and `INCREASE_BASE_URL` overrides.
    pub fn from_env() -> Result<Self, IncreaseError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| IncreaseError::MissingApiKey)?;
        let mut client = Self::new(api_key)?;
        if let Ok(raw) = env::var(ENVIRONMENT_VAR) {
            client = client.with_environment(raw.parse()?);
        }
        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            client = client.with_base_url(base_url);
        }
        Ok(client)
    }

    /// Point the client at the given environment.
    pub fn with_environment(self, environment: Environment) -> Self {
        info!("Using Increase {} environment", environment);
        self.with_base_url(environment.base_url())
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.requester.set_base_url(base_url.into());
        info!("Updated Increase API base URL to {}", self.requester.base_url());
        self
    }

    /// Replace the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, IncreaseError> {
        self.requester.set_timeout(timeout)?;
        debug!("Request timeout set to {:?}", timeout);
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }
}

impl<R: Requester> Client<R> {
    /// Build a client over a custom transport.
    pub fn with_requester(requester: R) -> Self {
        Self { requester }
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    pub fn accounts(&self) -> Accounts<'_, R> {
        Accounts::new(self)
    }

    pub fn account_numbers(&self) -> AccountNumbers<'_, R> {
        AccountNumbers::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_, R> {
        Transactions::new(self)
    }

    pub fn pending_transactions(&self) -> PendingTransactions<'_, R> {
        PendingTransactions::new(self)
    }

    pub fn declined_transactions(&self) -> DeclinedTransactions<'_, R> {
        DeclinedTransactions::new(self)
    }

    pub fn account_transfers(&self) -> AccountTransfers<'_, R> {
        AccountTransfers::new(self)
    }

    pub fn ach_transfers(&self) -> AchTransfers<'_, R> {
        AchTransfers::new(self)
    }

    pub fn wire_transfers(&self) -> WireTransfers<'_, R> {
        WireTransfers::new(self)
    }

    pub fn check_transfers(&self) -> CheckTransfers<'_, R> {
        CheckTransfers::new(self)
    }

    pub fn cards(&self) -> Cards<'_, R> {
        Cards::new(self)
    }

    pub fn simulations(&self) -> Simulations<'_, R> {
        Simulations::new(self)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, IncreaseError> {
        self.execute(ApiRequest::new(Method::Get, path)).await
    }

    pub(crate) async fn get_with_query<T, Q>(
        &self,
        path: String,
        params: &Q,
    ) -> Result<T, IncreaseError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let request = ApiRequest::new(Method::Get, path).with_query(query::encode(params)?);
        self.execute(request).await
    }

    pub(crate) async fn post<T, B>(&self, path: String, body: &B) -> Result<T, IncreaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = ApiRequest::new(Method::Post, path).with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: String,
    ) -> Result<T, IncreaseError> {
        self.execute(ApiRequest::new(Method::Post, path)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: String, body: &B) -> Result<T, IncreaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = ApiRequest::new(Method::Patch, path).with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub(crate) async fn list<T, P>(&self, path: &str, params: &P) -> Result<Page<T>, IncreaseError>
    where
        T: DeserializeOwned,
        P: Paginated,
    {
        params.validate_limit()?;
        self.get_with_query(path.to_string(), params).await
    }

    /// Follow `next_cursor` from `params.cursor` until the last page. Stops
    /// early if the server hands back the cursor it was just given.
    pub(crate) async fn list_all<T, P>(
        &self,
        path: &str,
        mut params: P,
    ) -> Result<Vec<T>, IncreaseError>
    where
        T: DeserializeOwned,
        P: Paginated,
    {
        let mut items = Vec::new();
        loop {
            let page: Page<T> = self.list(path, &params).await?;
            let has_next = page.has_next_page();
            items.extend(page.data);
            if !has_next {
                break;
            }
            if page.next_cursor.as_deref() == params.cursor() {
                warn!("{} returned the same cursor again, stopping pagination", path);
                break;
            }
            debug!("Fetching next page of {} after cursor", path);
            params.set_cursor(page.next_cursor);
        }
        debug!("Collected {} items from {}", items.len(), path);
        Ok(items)
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, IncreaseError> {
        let body = self.requester.send(request).await?;
        serde_json::from_str(&body).map_err(IncreaseError::from)
    }
}

/// `{collection}/{id}` with the ID checked so that it cannot address a
/// different endpoint.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String, IncreaseError> {
    if id.trim().is_empty() {
        return Err(IncreaseError::InvalidParameter("resource id must not be empty"));
    }
    if id.contains(['/', '?', '#']) {
        return Err(IncreaseError::InvalidParameter(
            "resource id must not contain '/', '?' or '#'",
        ));
    }
    Ok(format!("{collection}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRequester;
    use serde_json::json;

    #[test]
    fn rejects_blank_api_key() {
        assert!(matches!(Client::new("  "), Err(IncreaseError::MissingApiKey)));
    }

    #[test]
    fn environment_selects_base_url() {
        let client = Client::new("secret")
            .expect("client should build")
            .with_environment(Environment::Sandbox);
        assert_eq!(client.base_url(), "https://sandbox.increase.com");
        let client = client.with_base_url("http://localhost:4010");
        assert_eq!(client.base_url(), "http://localhost:4010");
    }

    #[test]
    fn parses_environment_names() {
        assert_eq!("Sandbox".parse::<Environment>().ok(), Some(Environment::Sandbox));
        assert_eq!(
            " production ".parse::<Environment>().ok(),
            Some(Environment::Production)
        );
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(IncreaseError::Environment(_))
        ));
    }

    #[test]
    fn resource_path_validates_id() {
        assert_eq!(
            resource_path("/accounts", "account_1").ok().as_deref(),
            Some("/accounts/account_1")
        );
        assert!(resource_path("/accounts", "").is_err());
        assert!(resource_path("/accounts", "a/b").is_err());
        assert!(resource_path("/accounts", "a?limit=1").is_err());
    }

    #[tokio::test]
    async fn list_all_follows_cursors() {
        let mock = MockRequester::new()
            .respond(json!({ "data": [{ "id": "a" }], "next_cursor": "c1" }))
            .respond(json!({ "data": [{ "id": "b" }, { "id": "c" }], "next_cursor": null }));
        let client = Client::with_requester(mock);

        let params = crate::models::ListAccountsParams {
            limit: Some(1),
            ..Default::default()
        };
        let items: Vec<serde_json::Value> =
            client.list_all("/accounts", params).await.expect("lists");
        assert_eq!(items.len(), 3);

        let calls = client.requester().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].query, vec![("limit".to_string(), "1".to_string())]);
        assert_eq!(
            calls[1].query,
            vec![
                ("cursor".to_string(), "c1".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_all_stops_on_repeated_cursor() {
        let mock = MockRequester::new()
            .respond(json!({ "data": [{ "id": "a" }], "next_cursor": "c1" }))
            .respond(json!({ "data": [{ "id": "b" }], "next_cursor": "c1" }))
            .respond(json!({ "data": [{ "id": "c" }], "next_cursor": null }));
        let client = Client::with_requester(mock);

        let items: Vec<serde_json::Value> = client
            .list_all("/accounts", crate::models::ListAccountsParams::default())
            .await
            .expect("lists");
        assert_eq!(items, vec![json!({ "id": "a" }), json!({ "id": "b" })]);
        assert_eq!(client.requester().calls().len(), 2);
    }

    #[tokio::test]
    async fn list_rejects_out_of_range_limit() {
        let client = Client::with_requester(MockRequester::new());
        let params = crate::models::ListAccountsParams {
            limit: Some(500),
            ..Default::default()
        };
        let err = client
            .list::<serde_json::Value, _>("/accounts", &params)
            .await
            .unwrap_err();
        assert!(matches!(err, IncreaseError::InvalidParameter(_)));
        assert!(client.requester().calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let client = Client::with_requester(MockRequester::new().respond_raw("not json"));
        let err = client
            .get::<serde_json::Value>("/accounts/account_1".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, IncreaseError::Json(_)));
    }
}
