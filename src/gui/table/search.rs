use crate::core::Member;

/// Name match is case-insensitive; the cedula is matched as typed.
pub fn matches_search(member: &Member, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let lowered = query.to_lowercase();
    member.nombres_completos.to_lowercase().contains(&lowered)
        || member.apellidos_completos.to_lowercase().contains(&lowered)
        || member.cedula.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(nombres: &str, apellidos: &str, cedula: &str) -> Member {
        Member {
            nombres_completos: nombres.to_string(),
            apellidos_completos: apellidos.to_string(),
            cedula: cedula.to_string(),
            ..Member::default()
        }
    }

    #[test]
    fn test_empty_query_passes_everyone() {
        assert!(matches_search(&member("", "", ""), ""));
    }

    #[test]
    fn test_name_match_ignores_case() {
        let ana = member("Ana Lucía", "PÉREZ Mora", "0912345678");
        assert!(matches_search(&ana, "ana"));
        assert!(matches_search(&ana, "LUCÍA"));
        assert!(matches_search(&ana, "pérez"));
        assert!(!matches_search(&ana, "luis"));
    }

    #[test]
    fn test_cedula_substring() {
        let ana = member("Ana", "Pérez", "0912345678");
        assert!(matches_search(&ana, "2345"));
        assert!(!matches_search(&ana, "0000"));
    }

    #[test]
    fn test_untrimmed_query_is_literal() {
        let ana = member("Ana", "Pérez", "0912345678");
        assert!(!matches_search(&ana, " ana "));
    }
}
