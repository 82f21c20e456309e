// src/common/search.rs

// Busca simples: substring, sem diferenciar maiúsculas/minúsculas.
// Não remove acentos ("maria" não encontra "María").

/// Um registro que participa da caixa de busca do painel.
pub trait Searchable {
    /// Os campos consultados pela busca, na ordem em que são testados.
    fn search_fields(&self) -> Vec<&str>;
}

/// Normaliza o termo digitado. `None` quando a busca deve aceitar tudo.
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub fn matches<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    match normalize_query(query) {
        None => true,
        Some(needle) => contains_folded(record, &needle),
    }
}

fn contains_folded<T: Searchable + ?Sized>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filtra preservando a ordem de entrada.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        None => records.iter().collect(),
        Some(needle) => records
            .iter()
            .filter(|record| contains_folded(*record, &needle))
            .collect(),
    }
}
