use serde::{Deserialize, Serialize};

use crate::models::Keyed;

/// An examining board. The identifier is the key it is listed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Board {
    /// Logo URL, if one is set and non-blank.
    pub fn logo(&self) -> Option<&str> {
        self.logo_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

/// `GET /api/boards` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct BoardList {
    #[serde(default)]
    pub boards: Keyed<Board>,
}

/// Form data from the add-board form.
#[derive(Debug, Deserialize)]
pub struct BoardForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    pub csrf_token: String,
}

impl BoardForm {
    /// Trimmed payload, or the validation message when the name is blank.
    pub fn to_board(&self) -> Result<Board, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter board name".to_string());
        }
        let logo = self.logo_url.trim();
        Ok(Board {
            name: name.to_string(),
            logo_url: (!logo.is_empty()).then(|| logo.to_string()),
        })
    }
}

/// Row on the boards panel.
#[derive(Debug, Clone)]
pub struct BoardListItem {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
}

impl BoardListItem {
    pub fn delete_href(&self) -> String {
        format!("/admin/boards/{}/delete", urlencoding::encode(&self.id))
    }

    pub fn from_entry(id: &str, board: &Board) -> Self {
        Self {
            id: id.to_string(),
            name: board.name.clone(),
            logo_url: board.logo().map(String::from),
        }
    }
}
