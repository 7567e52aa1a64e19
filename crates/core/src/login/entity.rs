//! 登录、密码与 OAuth 相关请求体。
//!
//! 这些请求几乎都携带凭据，日志摘要必须经过 [`mask`] 处理。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, digits, one_of, required};
use crate::common::mask::mask;
use crate::common::paging::parse_date;

pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub password: String,
}

impl Guarded for LoginRequest {
    fn summary(&self) -> Option<String> {
        Some(format!("clientId={} password={}", self.client_id, mask(&self.password, 0)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotpRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "123456")]
    pub totp: String,
}

impl Guarded for TotpRequest {
    fn check(&self) -> Result<(), Rejection> {
        digits("totp", &self.totp, 6)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("clientId={} totp={}", self.client_id, mask(&self.totp, 0)))
    }
}

/// # Summary
/// 忘记密码请求体，以 PAN 与出生日期核验身份。
///
/// # Invariants
/// - PAN 形如 `AAAAA9999A`；`dob` 为 `YYYY-MM-DD`。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "ABCDE1234F")]
    pub pan: String,
    #[schema(example = "1990-04-21")]
    pub dob: String,
}

impl Guarded for ForgotPasswordRequest {
    fn check(&self) -> Result<(), Rejection> {
        if !is_pan(&self.pan) {
            return Err(Rejection::InvalidRequest("pan is malformed".to_string()));
        }
        if parse_date(&self.dob).is_none() {
            return Err(Rejection::InvalidRequest(format!("dob is malformed: {:?}", self.dob)));
        }
        Ok(())
    }

    fn summary(&self) -> Option<String> {
        Some(format!("clientId={} pan={}", self.client_id, mask(&self.pan, 2)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub old_password: String,
    #[validate(length(min = 8, max = 64))]
    pub new_password: String,
}

impl Guarded for SetPasswordRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        if self.old_password == self.new_password {
            return Err(Rejection::InvalidRequest(
                "new password must differ from the old one".to_string(),
            ));
        }
        Ok(())
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "clientId={} oldPassword={} newPassword={}",
            self.client_id,
            mask(&self.old_password, 0),
            mask(&self.new_password, 0)
        ))
    }
}

/// 第三方应用请求用户授权
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OAuthAuthorizeRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub app_id: String,
    #[schema(example = "https://partner.example.com/callback")]
    #[validate(length(min = 1, max = 2048))]
    pub redirect_uri: String,
    pub scope: Option<String>,
    pub state: Option<String>,
}

impl Guarded for OAuthAuthorizeRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        if self.redirect_uri.starts_with("https://") || self.redirect_uri.starts_with("http://") {
            Ok(())
        } else {
            Err(Rejection::InvalidRequest(format!(
                "redirectUri must be an http(s) url, got {:?}",
                self.redirect_uri
            )))
        }
    }
}

/// # Summary
/// OAuth 换取/刷新访问令牌。
///
/// # Invariants
/// - `authorization_code` 必须携带 `code`，`refresh_token` 必须携带 `refreshToken`。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OAuthTokenRequest {
    #[validate(length(min = 1, max = 64))]
    pub app_id: String,
    #[validate(length(min = 1, max = 256))]
    pub app_secret: String,
    #[schema(example = "authorization_code")]
    pub grant_type: String,
    pub code: Option<String>,
    pub refresh_token: Option<String>,
}

impl Guarded for OAuthTokenRequest {
    fn check(&self) -> Result<(), Rejection> {
        one_of(
            "grantType",
            &self.grant_type,
            &[GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN],
        )?;
        if self.grant_type == GRANT_AUTHORIZATION_CODE {
            required("code", self.code.as_deref().unwrap_or_default())
        } else {
            required("refreshToken", self.refresh_token.as_deref().unwrap_or_default())
        }
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "appId={} grantType={} appSecret={} code={} refreshToken={}",
            self.app_id,
            self.grant_type,
            mask(&self.app_secret, 0),
            mask(self.code.as_deref().unwrap_or_default(), 0),
            mask(self.refresh_token.as_deref().unwrap_or_default(), 4)
        ))
    }
}

/// PAN: 5 位大写字母 + 4 位数字 + 1 位大写字母
fn is_pan(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_summary_hides_password() {
        let req = LoginRequest {
            client_id: "AB1234".into(),
            password: "hunter22".into(),
        };
        let summary = req.summary().unwrap();
        assert!(!summary.contains("hunter22"));
        assert_eq!(summary, "clientId=AB1234 password=******");

        let req = LoginRequest {
            client_id: "AB1234".into(),
            password: "a-considerably-longer-passphrase".into(),
        };
        assert_eq!(req.summary().unwrap(), summary);
    }

    #[test]
    fn test_forgot_password_pan_and_dob() {
        let mut req = ForgotPasswordRequest {
            client_id: "AB1234".into(),
            pan: "ABCDE1234F".into(),
            dob: "1990-04-21".into(),
        };
        assert!(req.check().is_ok());
        assert_eq!(req.summary().as_deref(), Some("clientId=AB1234 pan=******4F"));

        req.dob = "21/04/1990".into();
        assert!(req.check().is_err());

        req.dob = "1990-04-21".into();
        req.pan = "ABCD12345F".into();
        assert!(req.check().is_err());
    }

    #[test]
    fn test_set_password_must_change() {
        let req = SetPasswordRequest {
            client_id: "AB1234".into(),
            old_password: "samesame1".into(),
            new_password: "samesame1".into(),
        };
        assert!(req.check().is_err());
    }

    #[test]
    fn test_token_grant_companions() {
        let mut req = OAuthTokenRequest {
            app_id: "partner".into(),
            app_secret: "s3cr3t".into(),
            grant_type: GRANT_AUTHORIZATION_CODE.into(),
            code: None,
            refresh_token: None,
        };
        assert!(req.check().is_err());

        req.code = Some("abc".into());
        assert!(req.check().is_ok());

        req.grant_type = GRANT_REFRESH_TOKEN.into();
        assert!(req.check().is_err());

        req.grant_type = "password".into();
        assert!(req.check().is_err());

        let summary = req.summary().unwrap();
        assert!(!summary.contains("s3cr3t"));
        assert!(!summary.contains("abc"));
    }
}
