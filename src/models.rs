//! Data models for accounts, posts and categories

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// ============================================================================
// Users
// ============================================================================

/// Full account row. The password hash never leaves this type; every
/// response path goes through [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public account view, safe to serialize
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// List view: public fields plus the number of posts authored
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub post_count: i64,
}

/// Detail view: public fields plus the account's posts, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: PublicUser,
    pub posts: Vec<Post>,
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author fields embedded in post responses
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AuthorInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

/// Post joined with its author, the shape all post endpoints return
#[derive(Debug, Serialize, ToSchema)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: AuthorInfo,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@x.com".to_string(),
            name: Some("Ada".to_string()),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_user_never_serializes_hash() {
        let public: PublicUser = sample_user().into();
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("ada@x.com"));
    }

    #[test]
    fn test_post_with_author_flattens_post_fields() {
        let pwa = PostWithAuthor {
            post: Post {
                id: "p-1".to_string(),
                title: "Hello".to_string(),
                content: "World".to_string(),
                published: true,
                author_id: "u-1".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            author: AuthorInfo {
                id: "u-1".to_string(),
                name: None,
                email: "ada@x.com".to_string(),
            },
        };
        let json = serde_json::to_value(&pwa).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["author"]["email"], "ada@x.com");
    }
}
