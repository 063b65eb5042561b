use crate::core::Member;

/// Sortable list columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Apellidos,
    Cedula,
    DiscapacidadTipo,
    ProvinciaCanton,
    EstadoSocio,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Apellidos,
        SortField::Cedula,
        SortField::DiscapacidadTipo,
        SortField::ProvinciaCanton,
        SortField::EstadoSocio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Apellidos => "Nombre",
            SortField::Cedula => "Cédula",
            SortField::DiscapacidadTipo => "Discapacidad",
            SortField::ProvinciaCanton => "Provincia",
            SortField::EstadoSocio => "Estado",
        }
    }

    pub fn value(self, member: &Member) -> &str {
        match self {
            SortField::Apellidos => &member.apellidos_completos,
            SortField::Cedula => &member.cedula,
            SortField::DiscapacidadTipo => &member.discapacidad_tipo,
            SortField::ProvinciaCanton => &member.provincia_canton,
            SortField::EstadoSocio => &member.estado_socio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⏶",
            SortDirection::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: Option<SortField>, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same column flips the direction, another column starts ascending.
    pub fn toggle_or_set(&mut self, field: SortField) {
        match self.field {
            Some(current) if current == field => {
                self.direction = self.direction.reversed();
            }
            _ => {
                self.field = Some(field);
                self.direction = SortDirection::Ascending;
            }
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self { field: None, direction: SortDirection::Ascending }
    }
}

/// Stable sort of member indices by the lower-cased column value. Equal
/// values keep their relative order in both directions.
pub fn sort_indices(
    indices: &mut [usize],
    members: &[Member],
    field: SortField,
    direction: SortDirection,
) {
    let keys: Vec<String> =
        members.iter().map(|member| field.value(member).to_lowercase()).collect();

    indices.sort_by(|&lhs, &rhs| {
        let ordering = keys[lhs].cmp(&keys[rhs]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
