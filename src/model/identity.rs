use chrono::{DateTime, Utc};

pub const DEFAULT_NICKNAME: &str = "游客";

/// Who is playing this session. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    nickname: String,
    last_active_at: DateTime<Utc>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            last_active_at: Utc::now(),
        }
    }
}

impl Identity {
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    pub fn set_nickname(&mut self, name: impl Into<String>) {
        self.nickname = name.into();
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_nickname_marks_activity() {
        let mut identity = Identity::default();
        let before = identity.last_active_at();
        assert_eq!(identity.nickname(), DEFAULT_NICKNAME);

        identity.set_nickname("Lucky Cat");

        assert_eq!(identity.nickname(), "Lucky Cat");
        assert!(identity.last_active_at() >= before);
    }
}
