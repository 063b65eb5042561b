use std::collections::{
    HashMap,
    HashSet,
};

use super::models::{
    DashboardStats,
    Distribution,
    Member,
};

pub const UNKNOWN_DISABILITY: &str = "Sin especificar";
pub const UNKNOWN_PROVINCE: &str = "Desconocido";
pub const UNKNOWN_GENDER: &str = "No definido";
pub const UNKNOWN_EDUCATION: &str = "No definido";
pub const UNKNOWN_STATUS: &str = "Indefinido";
pub const DEFAULT_MEMBER_TYPE: &str = "Adherente";

pub const TOP_PROVINCES: usize = 10;

/// Disability percentage buckets as (label, exclusive upper bound). The last
/// bucket takes everything from 75 upwards.
pub const PERCENTAGE_RANGES: [(&str, f64); 4] =
    [("0-34%", 35.0), ("35-49%", 50.0), ("50-74%", 75.0), ("75-100%", f64::INFINITY)];

/// Counts labels while remembering the order each label was first seen.
#[derive(Default)]
struct Tally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.order.push(label.to_string());
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    fn into_distribution(self) -> Vec<Distribution> {
        let Tally { order, mut counts } = self;
        order
            .into_iter()
            .map(|name| {
                let value = counts.remove(&name).unwrap_or_default();
                Distribution { name, value }
            })
            .collect()
    }
}

fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

pub fn percentage_range(pct: f64) -> &'static str {
    PERCENTAGE_RANGES
        .iter()
        .find(|(_, upper)| pct < *upper)
        .map(|(label, _)| *label)
        .unwrap_or(PERCENTAGE_RANGES[PERCENTAGE_RANGES.len() - 1].0)
}

pub fn calculate_stats(members: &[Member]) -> DashboardStats {
    let total_members = members.len();
    let active_members = members.iter().filter(|m| m.is_active()).count();

    let total_percentage: f64 = members.iter().map(Member::disability_percentage).sum();
    let avg_disability = if total_members == 0 {
        0
    } else {
        (total_percentage / total_members as f64).round().max(0.0) as u32
    };

    let total_provinces = members
        .iter()
        .map(Member::province)
        .filter(|province| !province.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let mut disability = Tally::default();
    let mut provinces = Tally::default();
    let mut gender = Tally::default();
    let mut education = Tally::default();
    let mut status = Tally::default();
    let mut member_type = Tally::default();
    let mut ranges = [0usize; PERCENTAGE_RANGES.len()];

    for member in members {
        disability.add(label_or(&member.discapacidad_tipo, UNKNOWN_DISABILITY));
        provinces.add(label_or(member.province(), UNKNOWN_PROVINCE));
        gender.add(label_or(&member.genero, UNKNOWN_GENDER));
        education.add(label_or(&member.nivel_instruccion, UNKNOWN_EDUCATION));
        status.add(label_or(&member.estado_socio, UNKNOWN_STATUS));
        member_type.add(label_or(&member.tipo_de_socio, DEFAULT_MEMBER_TYPE));

        let pct = member.disability_percentage();
        if let Some(slot) = PERCENTAGE_RANGES.iter().position(|(_, upper)| pct < *upper) {
            ranges[slot] += 1;
        }
    }

    // sort_by is stable, so ties keep first-seen order
    let mut province_distribution = provinces.into_distribution();
    province_distribution.sort_by(|a, b| b.value.cmp(&a.value));
    province_distribution.truncate(TOP_PROVINCES);

    let percentage_ranges = PERCENTAGE_RANGES
        .iter()
        .zip(ranges)
        .map(|((label, _), value)| Distribution::new(*label, value))
        .collect();

    DashboardStats {
        total_members,
        active_members,
        avg_disability,
        total_provinces,
        disability_distribution: disability.into_distribution(),
        province_distribution,
        gender_distribution: gender.into_distribution(),
        education_distribution: education.into_distribution(),
        status_distribution: status.into_distribution(),
        type_distribution: member_type.into_distribution(),
        percentage_ranges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(pct: &str, province: &str, status: &str) -> Member {
        Member {
            discapacidad_porcentaje: pct.to_string(),
            provincia_canton: province.to_string(),
            estado_socio: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats.total_members, 0);
        assert_eq!(stats.avg_disability, 0);
        assert_eq!(stats.total_provinces, 0);
        assert!(stats.province_distribution.is_empty());
        assert_eq!(stats.percentage_ranges.iter().map(|d| d.value).sum::<usize>(), 0);
        assert_eq!(stats.percentage_ranges.len(), 4);
    }

    #[test]
    fn test_average_and_counts() {
        let members = vec![
            member("50", "Guayas/Daule", "Activo"),
            member("100", "Guayas", "Inactivo"),
        ];
        let stats = calculate_stats(&members);
        assert_eq!(stats.avg_disability, 75);
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.active_members, 1);

        let inactive = members.iter().filter(|m| m.estado_socio != "Activo").count();
        assert_eq!(stats.total_members, stats.active_members + inactive);
    }

    #[test]
    fn test_active_match_is_case_sensitive() {
        let members = vec![member("0", "", "activo"), member("0", "", "Activo")];
        assert_eq!(calculate_stats(&members).active_members, 1);
    }

    #[test]
    fn test_average_treats_garbage_as_zero() {
        let members = vec![member("abc", "", ""), member("", "", ""), member("90", "", "")];
        assert_eq!(calculate_stats(&members).avg_disability, 30);
    }

    #[test]
    fn test_percentage_buckets() {
        assert_eq!(percentage_range(34.9), "0-34%");
        assert_eq!(percentage_range(35.0), "35-49%");
        assert_eq!(percentage_range(49.9), "35-49%");
        assert_eq!(percentage_range(50.0), "50-74%");
        assert_eq!(percentage_range(74.99), "50-74%");
        assert_eq!(percentage_range(75.0), "75-100%");
        assert_eq!(percentage_range(100.0), "75-100%");

        let members: Vec<Member> =
            ["34.9", "35", "49.9", "50", "100"].iter().map(|p| member(p, "", "")).collect();
        let stats = calculate_stats(&members);
        let values: Vec<(String, usize)> =
            stats.percentage_ranges.into_iter().map(|d| (d.name, d.value)).collect();
        assert_eq!(
            values,
            vec![
                ("0-34%".to_string(), 1),
                ("35-49%".to_string(), 2),
                ("50-74%".to_string(), 1),
                ("75-100%".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_exponent_percentage_counts_in_its_bucket() {
        let stats = calculate_stats(&[member("7.5e1", "", "")]);
        assert_eq!(stats.avg_disability, 75);
        let top = stats.percentage_ranges.iter().find(|d| d.name == "75-100%").map(|d| d.value);
        assert_eq!(top, Some(1));
    }

    #[test]
    fn test_provinces_distinct_and_unknown_bucket() {
        let members = vec![
            member("0", "Azuay/Cuenca", ""),
            member("0", " Azuay ", ""),
            member("0", "", ""),
            member("0", " /Quito", ""),
        ];
        let stats = calculate_stats(&members);
        assert_eq!(stats.total_provinces, 1);
        assert_eq!(
            stats.province_distribution,
            vec![Distribution::new("Azuay", 2), Distribution::new("Desconocido", 2)]
        );
    }

    #[test]
    fn test_province_distribution_sorted_and_truncated() {
        let mut members = Vec::new();
        for (index, province) in crate::core::catalog::PROVINCES.iter().take(12).enumerate() {
            // Later provinces get more members; the first two tie with one each.
            for _ in 0..index.max(1) {
                members.push(member("0", province, ""));
            }
        }

        let stats = calculate_stats(&members);
        assert_eq!(stats.total_provinces, 12);
        assert_eq!(stats.province_distribution.len(), TOP_PROVINCES);
        assert!(stats.province_distribution.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(stats.province_distribution[0].name, "Loja");
    }

    #[test]
    fn test_province_ties_keep_first_seen_order() {
        let members = vec![
            member("0", "Napo", ""),
            member("0", "Loja", ""),
            member("0", "Loja", ""),
            member("0", "Carchi", ""),
            member("0", "Napo", ""),
        ];
        let names: Vec<String> =
            calculate_stats(&members).province_distribution.into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Napo", "Loja", "Carchi"]);
    }

    #[test]
    fn test_default_labels_and_first_seen_order() {
        let members = vec![
            Member {
                genero: "Femenino".to_string(),
                discapacidad_tipo: "Visual".to_string(),
                ..Default::default()
            },
            Member::default(),
            Member {
                genero: "Masculino".to_string(),
                tipo_de_socio: "Fundador".to_string(),
                estado_socio: "Activo".to_string(),
                nivel_instruccion: "Primaria".to_string(),
                ..Default::default()
            },
            Member { genero: "Femenino".to_string(), ..Default::default() },
        ];

        let stats = calculate_stats(&members);
        assert_eq!(
            stats.gender_distribution,
            vec![
                Distribution::new("Femenino", 2),
                Distribution::new("No definido", 1),
                Distribution::new("Masculino", 1),
            ]
        );
        assert_eq!(
            stats.disability_distribution,
            vec![Distribution::new("Visual", 1), Distribution::new("Sin especificar", 3)]
        );
        assert_eq!(
            stats.type_distribution,
            vec![Distribution::new("Adherente", 3), Distribution::new("Fundador", 1)]
        );
        assert_eq!(
            stats.status_distribution,
            vec![Distribution::new("Indefinido", 3), Distribution::new("Activo", 1)]
        );
        assert_eq!(
            stats.education_distribution,
            vec![Distribution::new("No definido", 3), Distribution::new("Primaria", 1)]
        );
    }
}
