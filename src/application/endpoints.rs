//! Backend endpoint paths.

pub const USER_API_PROFILE: &str = "/api/user-api/profile";
pub const USER_API_BALANCE: &str = "/api/user-api/balance";
pub const USER_API_TOKEN: &str = "/api/user-api/token";

pub const AUTH_PROFILE: &str = "/api/auth/profile";
pub const AUTH_BALANCE: &str = "/api/auth/balance";
pub const AUTH_THIRD_PARTY_STATUS: &str = "/api/auth/third-party-status";
pub const AUTH_BALANCE_LOGS: &str = "/api/auth/user-logs/balance";
pub const AUTH_PAYMENT_ORDERS: &str = "/api/auth/user-logs/payment-orders";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";

pub const MESSAGES: &str = "/api/messages";
pub const MESSAGES_UNREAD_COUNT: &str = "/api/messages/unread-count";
pub const MESSAGES_READ_ALL: &str = "/api/messages/read-all";

pub const CAPTCHA_STATUS: &str = "/api/captcha/status";
pub const CAPTCHA_GENERATE: &str = "/api/captcha/generate";
pub const CAPTCHA_VERIFY: &str = "/api/captcha/verify";

pub const VIP_LEVELS: &str = "/api/vip-levels";
pub const RECHARGE_SETTINGS: &str = "/api/recharge-settings";
pub const PAYMENT_CREATE: &str = "/api/payment/create";

/// Page selection for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Creates pagination, clamping the page to at least 1 and the page size
    /// to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(Self::DEFAULT_PAGE_SIZE)
                .clamp(1, Self::MAX_PAGE_SIZE),
        }
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Appends the page query to a path.
    #[must_use]
    pub fn apply(self, path: &str) -> String {
        format!("{path}?page={}&page_size={}", self.page, self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, None, 1, 10 ; "defaults")]
    #[test_case(Some(3), Some(25), 3, 25 ; "explicit")]
    #[test_case(Some(0), Some(0), 1, 1 ; "zero_clamped")]
    #[test_case(Some(2), Some(500), 2, 100 ; "oversized_clamped")]
    fn test_pagination_clamping(page: Option<u32>, size: Option<u32>, want_page: u32, want_size: u32) {
        let pagination = Pagination::new(page, size);

        assert_eq!(pagination.page(), want_page);
        assert_eq!(pagination.page_size(), want_size);
    }

    #[test]
    fn test_apply_builds_query() {
        assert_eq!(
            Pagination::default().apply(MESSAGES),
            "/api/messages?page=1&page_size=10"
        );
    }
}
