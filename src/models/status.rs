// src/models/status.rs

use serde::{Deserialize, Serialize};

// A cor do badge no painel. Não depende do idioma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Yellow,
    Blue,
    Red,
    Gray,
}

// O par (texto, cor) que a tela desenha para um status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub code: String,
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn new(code: &str, label: &str, tone: BadgeTone) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            tone,
        }
    }

    /// Código desconhecido: o texto passa como veio, em cinza.
    pub fn neutral(code: &str) -> Self {
        Self::new(code, code, BadgeTone::Gray)
    }
}
