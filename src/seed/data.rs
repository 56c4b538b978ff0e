use serde_json::{json, Value};

use crate::model::{
    Api, ApiKey, Authentication, BodyField, Endpoint, HttpMethod, Parameter, Permission,
};

/// API new sessions start on.
pub const DEFAULT_API_KEY: &str = "company-access-tokens";

/// The bundled catalog, in navigator order.
pub fn bundled_apis() -> Vec<Api> {
    vec![
        company_access_tokens_api(),
        outbound_webhooks_api(),
        fintech_accounts_api(),
        company_business_payouts_api(),
        company_accounts_api(),
    ]
}

/// Helper function to create a JSON Bearer-token authentication block
fn bearer_auth(scheme: &str, token: &str) -> Authentication {
    Authentication {
        scheme: scheme.to_string(),
        header: format!("Authorization: Bearer <{}>", token),
        api_key: None,
        content_type: "application/json".to_string(),
    }
}

/// Helper function to create a path/query parameter
fn param(
    name: &str,
    data_type: &str,
    location: &str,
    required: bool,
    description: &str,
    example: Value,
) -> Parameter {
    Parameter {
        name: name.to_string(),
        data_type: data_type.to_string(),
        location: location.to_string(),
        required,
        description: description.to_string(),
        example: Some(example),
    }
}

/// Helper function to create a request body field
fn field(name: &str, data_type: &str, required: bool, description: &str, example: Value) -> BodyField {
    BodyField {
        name: name.to_string(),
        data_type: data_type.to_string(),
        required,
        description: description.to_string(),
        example: Some(example),
    }
}

fn permissions(entries: &[(&str, &str)]) -> Option<Vec<Permission>> {
    Some(
        entries
            .iter()
            .map(|(action, description)| Permission {
                action: action.to_string(),
                description: description.to_string(),
            })
            .collect(),
    )
}

fn paging_params() -> Vec<Parameter> {
    vec![
        param("page", "number", "query", false, "Page number", json!(1)),
        param("pageSize", "number", "query", false, "Items per page", json!(20)),
    ]
}

fn customer_fields() -> Vec<BodyField> {
    vec![
        field("firstName", "string", true, "Customer first name", json!("Ada")),
        field("lastName", "string", true, "Customer last name", json!("Lovelace")),
        field("email", "string", true, "Customer email", json!("ada@example.com")),
        field("phoneNumber", "string", true, "Customer phone number", json!("+2348012345678")),
    ]
}

fn company_access_tokens_api() -> Api {
    let mut create = Endpoint::new(
        "create-access-token",
        "Create Access Token",
        HttpMethod::Post,
        "/api/company/access-tokens",
        "Creates a new access token for fintech integrations",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/company/access-tokens" \
    -H "Authorization: Bearer $TOKEN" \
    -H "Content-Type: application/json" \
    -d '{ "name": "Fintech Payouts", "expiresInDays": 90 }'"#,
    )
    .with_code_example(
        "javascript",
        r#"const payload = { name: "Fintech Payouts", expiresInDays: 90 };
const response = await fetch(`${BASE_URL}/api/company/access-tokens`, {
  method: "POST",
  headers: {
    Authorization: `Bearer ${TOKEN}`,
    "Content-Type": "application/json"
  },
  body: JSON.stringify(payload)
});
const data = await response.json();"#,
    )
    .with_response(
        "200",
        "Success - Token created",
        r#"{
  "success": true,
  "message": "Access token created",
  "data": {
    "id": 12,
    "name": "Fintech Payouts",
    "isActive": true,
    "expiresAt": "2026-05-06T12:00:00Z",
    "lastUsedAt": null,
    "createdAt": "2026-02-05T12:00:00Z",
    "accessToken": "fp_live_..."
  },
  "errors": null,
  "timestamp": "2026-02-05T12:00:00Z"
}"#,
    );
    create.request_body = vec![
        field("name", "string", true, "Name for the access token", json!("Fintech Payouts")),
        field("expiresInDays", "number", true, "Token expiration in days", json!(90)),
    ];
    create.notes =
        vec!["accessToken is only returned at creation time. Store it securely.".to_string()];

    let list = Endpoint::new(
        "list-access-tokens",
        "List Access Tokens",
        HttpMethod::Get,
        "/api/company/access-tokens",
        "Retrieves all access tokens for the company",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/access-tokens" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Tokens retrieved",
        r#"{
  "success": true,
  "message": "Access tokens retrieved",
  "data": [
    {
      "id": 12,
      "name": "Fintech Payouts",
      "isActive": true,
      "expiresAt": "2026-05-06T12:00:00Z",
      "lastUsedAt": "2026-02-05T12:10:00Z",
      "createdAt": "2026-02-05T12:00:00Z",
      "accessToken": null
    }
  ]
}"#,
    );

    let mut revoke = Endpoint::new(
        "revoke-access-token",
        "Revoke Access Token",
        HttpMethod::Delete,
        "/api/company/access-tokens/{tokenId}",
        "Revokes (deactivates) an existing access token",
    )
    .with_code_example(
        "curl",
        r#"curl -X DELETE "$BASE_URL/api/company/access-tokens/12" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Token revoked",
        r#"{
  "success": true,
  "message": "Access token revoked",
  "data": null
}"#,
    );
    revoke.parameters = vec![param(
        "tokenId",
        "number",
        "path",
        true,
        "ID of the token to revoke",
        json!(12),
    )];

    Api {
        key: ApiKey::from("company-access-tokens"),
        title: "Company Access Tokens API".to_string(),
        description: "Company access token endpoints for authenticating fintech integrations"
            .to_string(),
        category: Some("Company APIs".to_string()),
        authentication: bearer_auth("Bearer Token", "company_token"),
        permissions: permissions(&[
            ("payouts.create", "Create a token"),
            ("payouts.view", "List tokens"),
            ("payouts.manage", "Revoke a token"),
        ]),
        webhook_auth_types: None,
        endpoints: vec![create, list, revoke],
    }
}

fn outbound_webhooks_api() -> Api {
    let mut create = Endpoint::new(
        "create-webhook",
        "Create Webhook Configuration",
        HttpMethod::Post,
        "/api/outboundwebhook",
        "Creates a new webhook configuration for event delivery",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/outboundwebhook" \
    -H "Authorization: Bearer $TOKEN" \
    -H "X-API-Key: $API_KEY" \
    -H "Content-Type: application/json" \
    -d '{
      "name": "Fintech Payouts",
      "endpointUrl": "https://client.example.com/webhooks/payouts",
      "httpMethod": "POST",
      "authType": "hmac-sha256",
      "authValue": "your-signing-secret",
      "isActive": true,
      "eventType": "payout.completed"
    }'"#,
    )
    .with_code_example(
        "javascript",
        r#"const payload = {
  name: "Fintech Payouts",
  endpointUrl: "https://client.example.com/webhooks/payouts",
  httpMethod: "POST",
  authType: "hmac-sha256",
  authValue: "your-signing-secret",
  isActive: true,
  eventType: "payout.completed"
};
const response = await fetch(`${BASE_URL}/api/outboundwebhook`, {
  method: "POST",
  headers: {
    Authorization: `Bearer ${TOKEN}`,
    "X-API-Key": API_KEY,
    "Content-Type": "application/json"
  },
  body: JSON.stringify(payload)
});"#,
    )
    .with_response(
        "200",
        "Success - Webhook created",
        r#"{
  "success": true,
  "message": "Webhook configuration created successfully",
  "data": {
    "id": 77,
    "name": "Fintech Payouts",
    "endpointUrl": "https://client.example.com/webhooks/payouts",
    "isActive": true,
    "eventType": "payout.completed"
  }
}"#,
    );
    create.request_body = vec![
        field("name", "string", true, "Webhook name", json!("Fintech Payouts")),
        field(
            "endpointUrl",
            "string",
            true,
            "Target webhook URL",
            json!("https://client.example.com/webhooks/payouts"),
        ),
        field("httpMethod", "string", true, "HTTP method", json!("POST")),
        field("headers", "object", false, "Custom headers", json!({ "X-Customer-Id": "12345" })),
        field("authType", "string", true, "Authentication type", json!("hmac-sha256")),
        field("authValue", "string", true, "Authentication secret", json!("your-signing-secret")),
        field("authHeader", "string", false, "Auth header name", json!("X-Treegar-Signature")),
        field("isActive", "boolean", false, "Enable webhook", json!(true)),
        field("maxRetries", "number", false, "Max retry attempts", json!(3)),
        field("timeoutSeconds", "number", false, "Request timeout", json!(30)),
        field("description", "string", false, "Webhook description", json!("Payout status updates")),
        field("eventType", "string", true, "Event type to listen for", json!("payout.completed")),
    ];

    let list = Endpoint::new(
        "list-webhooks",
        "List Webhook Configurations",
        HttpMethod::Get,
        "/api/outboundwebhook",
        "Retrieves all webhook configurations",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/outboundwebhook" \
    -H "Authorization: Bearer $TOKEN" \
    -H "X-API-Key: $API_KEY""#,
    );

    let mut stats = Endpoint::new(
        "webhook-stats",
        "Webhook Delivery Stats",
        HttpMethod::Get,
        "/api/outboundwebhook/stats",
        "Get delivery statistics for webhooks",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/outboundwebhook/stats?eventType=payout.completed" \
    -H "Authorization: Bearer $TOKEN" \
    -H "X-API-Key: $API_KEY""#,
    )
    .with_response(
        "200",
        "Success - Stats retrieved",
        r#"{
  "success": true,
  "data": {
    "totalDeliveries": 12,
    "successfulDeliveries": 10,
    "failedDeliveries": 2,
    "pendingDeliveries": 0
  }
}"#,
    );
    stats.parameters = vec![param(
        "eventType",
        "string",
        "query",
        false,
        "Filter by event type",
        json!("payout.completed"),
    )];

    Api {
        key: ApiKey::from("outbound-webhooks"),
        title: "Outbound Webhooks API".to_string(),
        description: "Configure and manage outbound webhook deliveries for event notifications"
            .to_string(),
        category: Some("Integration APIs".to_string()),
        authentication: Authentication {
            api_key: Some("X-API-Key: <api_key>".to_string()),
            ..bearer_auth("Bearer Token + API Key", "admin_or_company_token")
        },
        permissions: None,
        webhook_auth_types: Some(
            [
                "Bearer",
                "ApiKey",
                "Basic",
                "hmac",
                "hmac-sha256",
                "hmac-sha512",
                "signature-sha512",
            ]
            .iter()
            .map(|kind| kind.to_string())
            .collect(),
        ),
        endpoints: vec![create, list, stats],
    }
}

fn fintech_accounts_api() -> Api {
    let mut create = Endpoint::new(
        "create-virtual-account",
        "Create Virtual Account",
        HttpMethod::Post,
        "/api/fintech-accounts",
        "Creates a new virtual account for a customer",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/fintech-accounts" \
    -H "Authorization: Bearer $TOKEN" \
    -H "Content-Type: application/json" \
    -d '{
      "firstName": "Ada",
      "lastName": "Lovelace",
      "email": "ada@example.com",
      "phoneNumber": "+2348012345678"
    }'"#,
    )
    .with_code_example(
        "javascript",
        r#"const payload = {
  firstName: "Ada",
  lastName: "Lovelace",
  email: "ada@example.com",
  phoneNumber: "+2348012345678"
};
const response = await fetch(`${BASE_URL}/api/fintech-accounts`, {
  method: "POST",
  headers: {
    Authorization: `Bearer ${TOKEN}`,
    "Content-Type": "application/json"
  },
  body: JSON.stringify(payload)
});"#,
    )
    .with_response(
        "200",
        "Success - Account created",
        r#"{
  "success": true,
  "message": "Account created",
  "data": {
    "accountId": 123,
    "accountNumber": "1020304050",
    "accountName": "Ada Lovelace",
    "customerCode": "CUST-8899",
    "currentBalance": 0,
    "currencyCode": "NGN",
    "status": "Active"
  }
}"#,
    );
    create.request_body = customer_fields();

    let mut list = Endpoint::new(
        "list-fintech-accounts",
        "List Accounts",
        HttpMethod::Get,
        "/api/fintech-accounts",
        "Retrieves all virtual accounts for the fintech integration",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/fintech-accounts?page=1&pageSize=20" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Accounts retrieved",
        r#"{
  "success": true,
  "data": {
    "items": [
      {
        "accountId": 123,
        "accountNumber": "1020304050",
        "accountName": "Ada Lovelace",
        "currentBalance": 0,
        "status": "Active"
      }
    ],
    "totalCount": 1,
    "pageNumber": 1
  }
}"#,
    );
    list.parameters = paging_params();

    let mut get = Endpoint::new(
        "get-fintech-account",
        "Get Account by ID",
        HttpMethod::Get,
        "/api/fintech-accounts/{id}",
        "Retrieves a specific account by ID",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/fintech-accounts/123" \
    -H "Authorization: Bearer $TOKEN""#,
    );
    get.parameters = vec![param("id", "number", "path", true, "Account ID", json!(123))];

    Api {
        key: ApiKey::from("fintech-accounts"),
        title: "Fintech Accounts API".to_string(),
        description: "Create and retrieve virtual accounts using fintech access tokens".to_string(),
        category: Some("Fintech APIs".to_string()),
        authentication: bearer_auth("Fintech Access Token", "fintech_access_token"),
        permissions: None,
        webhook_auth_types: None,
        endpoints: vec![create, list, get],
    }
}

fn company_business_payouts_api() -> Api {
    let banks = Endpoint::new(
        "list-banks",
        "List Banks",
        HttpMethod::Get,
        "/api/company/business-payouts/banks",
        "Retrieves available banks for payouts",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/business-payouts/banks" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Banks retrieved",
        r#"{
  "success": true,
  "data": [
    { "bankId": 12, "bankName": "Example Bank", "country": "NG" },
    { "bankId": 27, "bankName": "Sandbox Bank", "country": "NG" }
  ]
}"#,
    );

    let mut resolve = Endpoint::new(
        "resolve-account",
        "Resolve Account",
        HttpMethod::Post,
        "/api/company/business-payouts/resolve-account",
        "Validates and resolves a bank account",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/company/business-payouts/resolve-account" \
    -H "Authorization: Bearer $TOKEN" \
    -H "Content-Type: application/json" \
    -d '{ "bankId": 12, "accountNumber": "0123456789" }'"#,
    )
    .with_code_example(
        "javascript",
        r#"const payload = { bankId: 12, accountNumber: "0123456789" };
const response = await fetch(`${BASE_URL}/api/company/business-payouts/resolve-account`, {
  method: "POST",
  headers: {
    Authorization: `Bearer ${TOKEN}`,
    "Content-Type": "application/json"
  },
  body: JSON.stringify(payload)
});"#,
    )
    .with_response(
        "200",
        "Success - Account resolved",
        r#"{
  "success": true,
  "data": {
    "accountNumber": "0123456789",
    "accountName": "Ada Lovelace",
    "isSuccessful": true
  }
}"#,
    );
    resolve.request_body = vec![
        field("bankId", "number", true, "Bank ID", json!(12)),
        field("accountNumber", "string", true, "Account number", json!("0123456789")),
    ];

    let mut payout = Endpoint::new(
        "create-payout",
        "Create Payout",
        HttpMethod::Post,
        "/api/company/business-payouts",
        "Creates a new business payout",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/company/business-payouts" \
    -H "Authorization: Bearer $TOKEN" \
    -H "Content-Type: application/json" \
    -d '{
      "amount": 150000,
      "bankId": 12,
      "beneficiaryAccountNumber": "0123456789",
      "beneficiaryAccountName": "Ada Lovelace",
      "clientReference": "PAYOUT-2026-0001",
      "narration": "Vendor settlement"
    }'"#,
    )
    .with_code_example(
        "javascript",
        r#"const payload = {
  amount: 150000,
  bankId: 12,
  beneficiaryAccountNumber: "0123456789",
  beneficiaryAccountName: "Ada Lovelace",
  clientReference: "PAYOUT-2026-0001",
  narration: "Vendor settlement"
};
const response = await fetch(`${BASE_URL}/api/company/business-payouts`, {
  method: "POST",
  headers: {
    Authorization: `Bearer ${TOKEN}`,
    "Content-Type": "application/json"
  },
  body: JSON.stringify(payload)
});"#,
    )
    .with_response(
        "200",
        "Success - Payout created",
        r#"{
  "success": true,
  "message": "Payout created",
  "data": {
    "id": 98765,
    "amount": 150000,
    "currency": "NGN",
    "status": "Processing",
    "clientReference": "PAYOUT-2026-0001",
    "transactionReference": "BPAY-ABC123"
  }
}"#,
    );
    payout.request_body = vec![
        field("amount", "number", true, "Payout amount in kobo/cents", json!(150000)),
        field("bankId", "number", true, "Bank ID", json!(12)),
        field(
            "beneficiaryAccountNumber",
            "string",
            true,
            "Recipient account number",
            json!("0123456789"),
        ),
        field(
            "beneficiaryAccountName",
            "string",
            true,
            "Recipient account name",
            json!("Ada Lovelace"),
        ),
        field("clientReference", "string", true, "Your unique reference", json!("PAYOUT-2026-0001")),
        field("narration", "string", false, "Transaction description", json!("Vendor settlement")),
    ];

    let mut balance = Endpoint::new(
        "get-wallet-balance",
        "Get Wallet Balance",
        HttpMethod::Get,
        "/api/company/business-payouts/balance",
        "Retrieves current wallet balance",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/business-payouts/balance?currencyCode=NGN" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Balance retrieved",
        r#"{
  "success": true,
  "data": {
    "walletId": 101,
    "currencyCode": "NGN",
    "currentBalance": 1250000,
    "status": "Active"
  }
}"#,
    );
    balance.parameters = vec![param(
        "currencyCode",
        "string",
        "query",
        false,
        "Currency code",
        json!("NGN"),
    )];

    Api {
        key: ApiKey::from("company-business-payouts"),
        title: "Company Business Payouts API".to_string(),
        description: "Create and manage business payouts using company accounts".to_string(),
        category: Some("Company APIs".to_string()),
        authentication: bearer_auth("Company Bearer Token", "company_token"),
        permissions: None,
        webhook_auth_types: None,
        endpoints: vec![banks, resolve, payout, balance],
    }
}

fn company_accounts_api() -> Api {
    let mut create = Endpoint::new(
        "create-company-account",
        "Create Virtual Account",
        HttpMethod::Post,
        "/api/company/accounts",
        "Creates a new virtual account",
    )
    .with_code_example(
        "curl",
        r#"curl -X POST "$BASE_URL/api/company/accounts" \
    -H "Authorization: Bearer $TOKEN" \
    -H "Content-Type: application/json" \
    -d '{
      "firstName": "Ada",
      "lastName": "Lovelace",
      "email": "ada@example.com",
      "phoneNumber": "+2348012345678"
    }'"#,
    )
    .with_response(
        "200",
        "Success - Account created",
        r#"{
  "success": true,
  "message": "Account created",
  "data": {
    "accountId": 123,
    "accountNumber": "1020304050",
    "accountName": "Ada Lovelace",
    "status": "Active"
  }
}"#,
    );
    create.request_body = customer_fields();

    let mut list = Endpoint::new(
        "list-company-accounts",
        "List Accounts",
        HttpMethod::Get,
        "/api/company/accounts",
        "Retrieves all company accounts",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/accounts?page=1&pageSize=20" \
    -H "Authorization: Bearer $TOKEN""#,
    );
    list.parameters = paging_params();

    let account_number = || {
        param(
            "accountNumber",
            "string",
            "path",
            true,
            "Account number",
            json!("1020304050"),
        )
    };

    let mut balance = Endpoint::new(
        "get-account-balance",
        "Get Account Balance",
        HttpMethod::Get,
        "/api/company/accounts/{accountNumber}/balance",
        "Retrieves current account balance",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/accounts/1020304050/balance" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Balance retrieved",
        r#"{
  "success": true,
  "data": {
    "accountNumber": "1020304050",
    "availableBalance": 5000,
    "currency": "NGN",
    "accountStatus": "ACTIVE"
  }
}"#,
    );
    balance.parameters = vec![account_number()];

    let mut statement = Endpoint::new(
        "get-account-statement",
        "Get Account Statement",
        HttpMethod::Get,
        "/api/company/accounts/{accountNumber}/statement",
        "Retrieves account transaction history",
    )
    .with_code_example(
        "curl",
        r#"curl -X GET "$BASE_URL/api/company/accounts/1020304050/statement?startDate=2026-01-01&endDate=2026-01-31" \
    -H "Authorization: Bearer $TOKEN""#,
    )
    .with_response(
        "200",
        "Success - Statement retrieved",
        r#"{
  "success": true,
  "data": {
    "accountNumber": "1020304050",
    "openingBalance": 0,
    "closingBalance": 5000,
    "statementList": [
      {
        "transactionReference": "TXN-1001",
        "transactionAmount": 5000,
        "transactionType": "CREDIT",
        "transactionDate": "2026-01-10T09:15:00Z"
      }
    ]
  }
}"#,
    );
    statement.parameters = vec![
        account_number(),
        param("startDate", "string", "query", false, "Start date (YYYY-MM-DD)", json!("2026-01-01")),
        param("endDate", "string", "query", false, "End date (YYYY-MM-DD)", json!("2026-01-31")),
    ];

    Api {
        key: ApiKey::from("company-accounts"),
        title: "Company Accounts API".to_string(),
        description: "Manage company virtual accounts and view balances/statements".to_string(),
        category: Some("Company APIs".to_string()),
        authentication: bearer_auth("Company Bearer Token", "company_token"),
        permissions: permissions(&[
            ("accounts.create", "Create accounts"),
            ("accounts.view", "View accounts and balances"),
            ("transactions.view", "View statements"),
        ]),
        webhook_auth_types: None,
        endpoints: vec![create, list, balance, statement],
    }
}
