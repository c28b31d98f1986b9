use serde::{Deserialize, Serialize};

/// Content type sent with payload files unless the tool options set `-T`.
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "GET")]
    Get,
    #[serde(alias = "POST")]
    Post,
    #[serde(alias = "PATCH")]
    Patch,
    #[serde(alias = "PUT")]
    Put,
    #[serde(alias = "DELETE")]
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Flag that hands a payload file to `ab`, for methods that carry one.
    #[must_use]
    pub const fn body_flag(self) -> Option<&'static str> {
        match self {
            HttpMethod::Post | HttpMethod::Patch => Some("-p"),
            HttpMethod::Put => Some("-u"),
            HttpMethod::Get | HttpMethod::Delete => None,
        }
    }

    #[must_use]
    pub const fn carries_body(self) -> bool {
        self.body_flag().is_some()
    }

    /// Methods `ab` has no dedicated flag for are sent with `-m`.
    #[must_use]
    pub const fn method_override(self) -> Option<&'static str> {
        match self {
            HttpMethod::Patch | HttpMethod::Delete => Some(self.as_str()),
            HttpMethod::Get | HttpMethod::Post | HttpMethod::Put => None,
        }
    }
}
