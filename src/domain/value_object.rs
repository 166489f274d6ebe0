//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Room identifier value object.
///
/// Room ids are externally supplied opaque strings; the server never
/// generates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::RoomIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// Represents the name a participant joins a room under. Names are the
/// room-facing identity; connection identity is tracked separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name string
    ///
    /// # Returns
    ///
    /// A Result containing the UserName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::UserNameEmpty);
        }
        let len = name.len();
        if len > 100 {
            return Err(ValueObjectError::UserNameTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValueObjectError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language identifier value object.
///
/// Identifies the language the shared buffer is edited and executed as,
/// e.g. `"javascript"` or `"python"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    /// Create a new Language.
    ///
    /// # Arguments
    ///
    /// * `lang` - The language identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the Language or an error if validation fails
    pub fn new(lang: String) -> Result<Self, ValueObjectError> {
        if lang.is_empty() {
            return Err(ValueObjectError::LanguageEmpty);
        }
        let len = lang.len();
        if len > 50 {
            return Err(ValueObjectError::LanguageTooLong {
                max: 50,
                actual: len,
            });
        }
        Ok(Self(lang))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Language {
    type Error = ValueObjectError;

    fn try_from(lang: String) -> Result<Self, Self::Error> {
        Self::new(lang)
    }
}

impl Default for Language {
    /// The language a freshly created room starts with.
    fn default() -> Self {
        Self(crate::domain::entity::DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection identifier value object.
///
/// Assigned by the server when a transport channel opens; unique for the
/// lifetime of the process and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a new ConnectionId from an existing id string.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }
        Ok(Self(id))
    }

    /// Create a ConnectionId from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 有効なルーム ID を作成できる
        // given (前提条件):
        let id = "r1".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "r1");
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // given (前提条件):
        let id = "".to_string();

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_room_id_new_too_long_fails() {
        // テスト項目: 101 文字以上のルーム ID は作成できない
        // given (前提条件):
        let id = "a".repeat(101);

        // when (操作):
        let result = RoomId::new(id);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomIdTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_user_name_new_success() {
        // テスト項目: 有効な表示名を作成できる
        // given (前提条件):
        let name = "alice".to_string();

        // when (操作):
        let result = UserName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_user_name_new_empty_fails() {
        // テスト項目: 空の表示名は作成できない
        // given (前提条件):
        let name = "".to_string();

        // when (操作):
        let result = UserName::new(name);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::UserNameEmpty);
    }

    #[test]
    fn test_user_name_equality() {
        // テスト項目: 同じ値を持つ UserName は等価
        // given (前提条件):
        let name1 = UserName::new("alice".to_string()).unwrap();
        let name2 = UserName::new("alice".to_string()).unwrap();
        let name3 = UserName::new("bob".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    #[test]
    fn test_language_new_success() {
        // テスト項目: 有効な言語識別子を作成できる
        // given (前提条件):
        let lang = "python".to_string();

        // when (操作):
        let result = Language::new(lang);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "python");
    }

    #[test]
    fn test_language_new_empty_fails() {
        // テスト項目: 空の言語識別子は作成できない
        // given (前提条件):
        let lang = "".to_string();

        // when (操作):
        let result = Language::new(lang);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::LanguageEmpty);
    }

    #[test]
    fn test_language_default() {
        // テスト項目: デフォルト言語は javascript
        // when (操作):
        let lang = Language::default();

        // then (期待する結果):
        assert_eq!(lang.as_str(), "javascript");
    }

    #[test]
    fn test_connection_id_from_uuid() {
        // テスト項目: UUID から ConnectionId を生成できる
        // given (前提条件):
        let uuid = uuid::Uuid::new_v4();

        // when (操作):
        let id = ConnectionId::from_uuid(uuid);

        // then (期待する結果):
        assert_eq!(id.as_str(), uuid.to_string());
    }

    #[test]
    fn test_connection_id_new_empty_fails() {
        // テスト項目: 空の ConnectionId は作成できない
        // when (操作):
        let result = ConnectionId::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::ConnectionIdEmpty);
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert!(ts2 > ts1);
    }
}
