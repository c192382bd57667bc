//! Externally supplied inputs for create/edit operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorInput {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAuthorInput {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookInput {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBookInput {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_input_reads_type_and_author_id() -> anyhow::Result<()> {
        let input: EditBookInput =
            serde_json::from_str(r#"{"id":4,"title":"Emma","type":"Novel","authorId":2}"#)?;
        assert_eq!(input.kind, "Novel");
        assert_eq!(input.author_id, 2);
        Ok(())
    }

    #[test]
    fn author_input_requires_both_names() {
        let res = serde_json::from_str::<CreateAuthorInput>(r#"{"firstName":"Jane"}"#);
        assert!(res.is_err());
    }
}
