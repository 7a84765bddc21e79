//! # Mint Flow
//!
//! [`Minter`] turns a [`MintRequest`] into a single `mint` call and submits it
//! through an [`Account`]. [`MintForm`] is the form state the UI renders; it
//! wraps a submission with the submitting flag and the result fields.
//!
//! Checks run in a fixed order: required fields, then connection. A failed
//! check never reaches the wallet.

use crate::account::{Account, Call, InvocationDetails};
use crate::byte_array::{ByteArray, Calldata};
use crate::config::MintConfig;
use crate::error::{MintError, Result};
use crate::metadata::build_metadata;

/// User input for one mint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintRequest {
    pub name: String,
    pub description: String,
    pub svg_data: String,
}

impl MintRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        svg_data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            svg_data: svg_data.into(),
        }
    }

    /// Fails with the list of empty fields.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("description", &self.description),
            ("svg_data", &self.svg_data),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MintError::Validation(missing.join(", ")))
        }
    }
}

/// Builds and submits mint calls for one contract.
#[derive(Clone, Debug, Default)]
pub struct Minter {
    config: MintConfig,
}

impl Minter {
    pub fn new(config: MintConfig) -> Self {
        Self { config }
    }

    pub fn details(&self) -> InvocationDetails {
        InvocationDetails {
            max_fee: self.config.max_fee,
        }
    }

    /// Build the `mint` call for `request` without submitting it.
    pub fn prepare(&self, request: &MintRequest) -> Result<Call> {
        let metadata = build_metadata(&request.name, &request.description, &request.svg_data)?;
        let compiled = Calldata::from(&ByteArray::from_str_bytes(&metadata));

        // The wallet receives the arguments split from the joined form
        let calldata = compiled
            .to_string()
            .parse::<Calldata>()
            .map_err(|e| MintError::Encoding(e.to_string()))?;

        log::debug!("Metadata: {}", metadata);
        log::debug!("Calldata: {}", calldata);

        Ok(Call {
            contract_address: self.config.contract_address.clone(),
            entrypoint: self.config.entrypoint.clone(),
            calldata,
        })
    }

    /// Validate, build and submit a mint. Returns the transaction hash.
    ///
    /// `account` is `None` when no wallet is connected. Every failure is
    /// logged with its cause before being returned.
    pub async fn submit<A>(&self, request: &MintRequest, account: Option<&A>) -> Result<String>
    where
        A: Account + ?Sized,
    {
        let result = self.try_submit(request, account).await;
        match &result {
            Ok(hash) => log::info!("Transaction hash: {}", hash),
            Err(err) => log::error!("Mint failed: {}", err),
        }
        result
    }

    async fn try_submit<A>(&self, request: &MintRequest, account: Option<&A>) -> Result<String>
    where
        A: Account + ?Sized,
    {
        request.validate()?;
        let account = account.ok_or(MintError::Connection)?;

        let call = self.prepare(request)?;
        log::debug!("Submitting mint from {}", account.address());

        account
            .execute(&call, &self.details())
            .await
            .map(|res| res.transaction_hash)
            .map_err(MintError::Submission)
    }
}

/// State behind the mint form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintForm {
    pub name: String,
    pub description: String,
    pub svg_data: String,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub transaction_hash: Option<String>,
}

impl MintForm {
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    pub fn set_svg_data(&mut self, value: String) {
        self.svg_data = value;
    }

    pub fn request(&self) -> MintRequest {
        MintRequest::new(&self.name, &self.description, &self.svg_data)
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self, connected: bool) -> bool {
        connected && !self.is_submitting
    }

    /// Check the inputs, then enter the submitting state and snapshot them.
    ///
    /// Returns `None` while a previous submission is still pending. A missing
    /// field or connection is shown as the error and leaves the previous
    /// transaction hash in place; only a submission that actually starts
    /// clears the result fields.
    pub fn begin_submit(&mut self, connected: bool) -> Option<MintRequest> {
        if self.is_submitting {
            return None;
        }

        let request = self.request();
        let checked = request
            .validate()
            .and_then(|_| connected.then_some(()).ok_or(MintError::Connection));
        if let Err(err) = checked {
            log::error!("Mint failed: {}", err);
            self.error = Some(err.user_message().to_string());
            return None;
        }

        self.is_submitting = true;
        self.error = None;
        self.transaction_hash = None;
        Some(request)
    }

    /// Record the outcome of a submission started with [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: Result<String>) {
        self.is_submitting = false;
        match result {
            Ok(hash) => self.transaction_hash = Some(hash),
            Err(err) => self.error = Some(err.user_message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::InvokeResult;
    use crate::byte_array::BYTES_PER_WORD;
    use crate::constants::CONTRACT_ADDRESS;
    use crate::error::{MINT_FAILED_MESSAGE, MISSING_FIELDS_MESSAGE, NOT_CONNECTED_MESSAGE};
    use async_trait::async_trait;
    use num_bigint::BigUint;
    use std::cell::RefCell;

    const ACCOUNT_ADDRESS: &str =
        "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    struct MockAccount {
        calls: RefCell<Vec<(Call, InvocationDetails)>>,
        fail_with: Option<String>,
    }

    impl MockAccount {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: Some(reason.to_string()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Account for MockAccount {
        fn address(&self) -> &str {
            ACCOUNT_ADDRESS
        }

        async fn execute(
            &self,
            call: &Call,
            details: &InvocationDetails,
        ) -> std::result::Result<InvokeResult, String> {
            self.calls.borrow_mut().push((call.clone(), *details));
            match &self.fail_with {
                Some(reason) => Err(reason.clone()),
                None => Ok(InvokeResult {
                    transaction_hash: "0xabc123".to_string(),
                }),
            }
        }
    }

    fn art1() -> MintRequest {
        MintRequest::new("Art1", "desc", "<svg></svg>")
    }

    #[tokio::test]
    async fn test_submit_executes_one_mint_call() {
        let minter = Minter::default();
        let account = MockAccount::ok();

        let hash = minter.submit(&art1(), Some(&account)).await.unwrap();
        assert_eq!(hash, "0xabc123");

        let calls = account.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (call, details) = &calls[0];
        assert_eq!(call.entrypoint, "mint");
        assert_eq!(call.contract_address, CONTRACT_ADDRESS);
        assert_eq!(details.max_fee, 1_000_000_000_000_000);

        let metadata =
            r#"{"name":"Art1","description":"desc","image":"data:image/svg+xml,<svg></svg>"}"#;
        let expected = ByteArray::from_str_bytes(metadata);
        assert_eq!(call.calldata.len(), expected.calldata_len());
        assert_eq!(call.calldata, Calldata::from(&expected));
    }

    #[tokio::test]
    async fn test_missing_fields_never_execute() {
        let minter = Minter::default();
        let account = MockAccount::ok();

        for request in [
            MintRequest::new("", "desc", "<svg/>"),
            MintRequest::new("name", "", "<svg/>"),
            MintRequest::new("name", "desc", ""),
        ] {
            let err = minter.submit(&request, Some(&account)).await.unwrap_err();
            assert!(matches!(err, MintError::Validation(_)));
        }
        assert!(account.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_validation_reported_before_connection() {
        let minter = Minter::default();
        let err = minter
            .submit::<MockAccount>(&MintRequest::default(), None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MintError::Validation("name, description, svg_data".to_string())
        );
    }

    #[tokio::test]
    async fn test_no_connection_never_executes() {
        let minter = Minter::default();
        let err = minter.submit::<MockAccount>(&art1(), None).await.unwrap_err();
        assert_eq!(err, MintError::Connection);
    }

    #[tokio::test]
    async fn test_execute_failure_becomes_submission_error() {
        let minter = Minter::default();
        let account = MockAccount::failing("User abort");
        let err = minter.submit(&art1(), Some(&account)).await.unwrap_err();
        assert_eq!(err, MintError::Submission("User abort".to_string()));
        assert_eq!(account.calls.borrow().len(), 1);
    }

    #[test]
    fn test_prepare_uses_configured_target() {
        let config = MintConfig::default()
            .with_contract_address("0x1234")
            .with_max_fee(42);
        let minter = Minter::new(config);
        let call = minter.prepare(&art1()).unwrap();
        assert_eq!(call.contract_address, "0x1234");
        assert_eq!(minter.details().max_fee, 42);
    }

    /// Drive the form the way the mint page does.
    async fn run_form(form: &mut MintForm, minter: &Minter, account: Option<&MockAccount>) {
        let Some(request) = form.begin_submit(account.is_some()) else {
            return;
        };
        let result = minter.submit(&request, account).await;
        form.finish_submit(result);
    }

    /// Reassemble the string a compiled `ByteArray` calldata carries.
    fn decode_calldata(calldata: &Calldata) -> String {
        let elements = calldata.as_slice();
        let words: usize = elements[0].parse().unwrap();
        assert_eq!(elements.len(), words + 3);

        let felt_bytes = |element: &str, width: usize| {
            let value = BigUint::parse_bytes(element.as_bytes(), 10).unwrap();
            let bytes = if value == BigUint::default() {
                Vec::new()
            } else {
                value.to_bytes_be()
            };
            assert!(bytes.len() <= width);
            let mut padded = vec![0u8; width - bytes.len()];
            padded.extend(bytes);
            padded
        };

        let mut bytes = Vec::new();
        for word in &elements[1..=words] {
            bytes.extend(felt_bytes(word.as_str(), BYTES_PER_WORD));
        }
        let pending_len: usize = elements[words + 2].parse().unwrap();
        bytes.extend(felt_bytes(elements[words + 1].as_str(), pending_len));

        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_art1_calldata_felts() {
        let call = Minter::default().prepare(&art1()).unwrap();
        assert_eq!(
            call.calldata.as_slice(),
            [
                "2",
                "217559824197960344904311824783758631694627901870211688108472151406271930980",
                "179247927005991544569474014166306731946118745417001171175932075143024310381",
                "561665276167989841192092103220273789",
                "15",
            ]
        );
    }

    #[tokio::test]
    async fn test_submitted_calldata_decodes_to_metadata() {
        let minter = Minter::default();
        let account = MockAccount::ok();

        let requests = [
            MintRequest::new("Quoted", "desc", r#"<svg width="10"><text>"hi"</text></svg>"#),
            MintRequest::new("Café 🎨", "ünïcödé", "<svg><text>é🚀</text></svg>"),
            MintRequest::new("Long", "desc", format!("<svg>{}</svg>", "x".repeat(189))),
            // 20-byte name puts the metadata on a word boundary
            MintRequest::new("a".repeat(20), "desc", "<svg></svg>"),
        ];
        assert_eq!(requests[2].svg_data.len(), 200);

        for request in &requests {
            minter.submit(request, Some(&account)).await.unwrap();
        }

        let calls = account.calls.borrow();
        assert_eq!(calls.len(), requests.len());
        for (request, (call, _)) in requests.iter().zip(calls.iter()) {
            let metadata =
                build_metadata(&request.name, &request.description, &request.svg_data).unwrap();
            assert_eq!(decode_calldata(&call.calldata), metadata);
        }
        assert!(decode_calldata(&calls[0].0.calldata).contains("<svg width='10'>"));

        let boundary = &calls[3].0.calldata;
        assert_eq!(boundary.as_slice()[0], "3");
        assert_eq!(boundary.as_slice()[4..], ["0", "0"]);
    }

    #[tokio::test]
    async fn test_form_success_stores_hash() {
        let minter = Minter::default();
        let account = MockAccount::ok();
        let mut form = MintForm::default();
        form.set_name("Art1".to_string());
        form.set_description("desc".to_string());
        form.set_svg_data("<svg></svg>".to_string());

        run_form(&mut form, &minter, Some(&account)).await;

        assert!(!form.is_submitting);
        assert_eq!(form.transaction_hash.as_deref(), Some("0xabc123"));
        assert!(form.error.is_none());
        // inputs are kept between mints
        assert_eq!(form.name, "Art1");
    }

    #[tokio::test]
    async fn test_form_failure_shows_message_without_hash() {
        let minter = Minter::default();
        let account = MockAccount::failing("rejected");
        let mut form = MintForm {
            name: "Art1".to_string(),
            description: "desc".to_string(),
            svg_data: "<svg></svg>".to_string(),
            transaction_hash: Some("0xold".to_string()),
            ..MintForm::default()
        };

        run_form(&mut form, &minter, Some(&account)).await;

        assert!(!form.is_submitting);
        assert!(form.transaction_hash.is_none());
        assert_eq!(form.error.as_deref(), Some(MINT_FAILED_MESSAGE));
    }

    #[test]
    fn test_failed_checks_keep_previous_hash() {
        let mut form = MintForm {
            transaction_hash: Some("0xold".to_string()),
            ..MintForm::default()
        };

        assert!(form.begin_submit(true).is_none());
        assert_eq!(form.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
        assert_eq!(form.transaction_hash.as_deref(), Some("0xold"));
        assert!(!form.is_submitting);

        form.set_name("a".to_string());
        form.set_description("b".to_string());
        form.set_svg_data("c".to_string());
        assert!(form.begin_submit(false).is_none());
        assert_eq!(form.error.as_deref(), Some(NOT_CONNECTED_MESSAGE));
        assert_eq!(form.transaction_hash.as_deref(), Some("0xold"));

        let request = form.begin_submit(true).unwrap();
        assert_eq!(request, MintRequest::new("a", "b", "c"));
        assert!(form.error.is_none());
        assert!(form.transaction_hash.is_none());
    }

    #[test]
    fn test_begin_submit_refuses_while_pending() {
        let mut form = MintForm {
            name: "a".to_string(),
            description: "b".to_string(),
            svg_data: "c".to_string(),
            ..MintForm::default()
        };
        assert!(form.can_submit(true));
        assert!(!form.can_submit(false));

        assert!(form.begin_submit(true).is_some());
        assert!(!form.can_submit(true));
        assert!(form.begin_submit(true).is_none());
        assert!(form.error.is_none());

        form.finish_submit(Ok("0x1".to_string()));
        assert!(form.can_submit(true));
    }
}
