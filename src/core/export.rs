use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    models::Member,
    AedisError,
};

pub const CSV_FILE_NAME: &str = "reporte_socios_aedis.csv";

pub const CSV_HEADERS: [&str; 9] = [
    "Nombres",
    "Apellidos",
    "Cédula",
    "Discapacidad",
    "Porcentaje",
    "Provincia",
    "Celular",
    "Estado",
    "Comisión",
];

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        quoted(value)
    } else {
        value.to_string()
    }
}

/// Report row for one member. Cedula and commission are always quoted.
pub fn csv_row(member: &Member) -> String {
    [
        field(&member.nombres_completos),
        field(&member.apellidos_completos),
        quoted(&member.cedula),
        field(&member.discapacidad_tipo),
        field(&member.discapacidad_porcentaje),
        field(&member.provincia_canton),
        field(&member.celular),
        field(&member.estado_socio),
        quoted(&member.comite_comision.to_string()),
    ]
    .join(",")
}

pub fn write_csv_report<W: Write>(members: &[Member], writer: &mut W) -> Result<(), AedisError> {
    writeln!(writer, "{}", CSV_HEADERS.join(","))?;
    for member in members {
        writeln!(writer, "{}", csv_row(member))?;
    }
    Ok(())
}

pub fn export_csv(members: &[Member], path: &Path) -> Result<(), AedisError> {
    let file = File::create(path)
        .map_err(|e| AedisError::Custom(format!("Failed to create CSV file {:?}: {}", path, e)))?;
    let mut writer = BufWriter::new(file);
    write_csv_report(members, &mut writer)?;
    writer.flush().map_err(|e| AedisError::Custom(format!("Failed to flush CSV file: {}", e)))?;
    Ok(())
}

/// Writes the report into `dir` under the standard report name.
pub fn export_csv_to_dir(members: &[Member], dir: &Path) -> Result<PathBuf, AedisError> {
    let path = dir.join(CSV_FILE_NAME);
    export_csv(members, &path)?;
    Ok(path)
}

/// Reads a report back into rows of fields, header included.
pub fn parse_csv_report(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut current)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut current));
                rows.push(std::mem::take(&mut row));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !row.is_empty() {
        row.push(current);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::committee::CommitteeSet;

    fn sample_members() -> Vec<Member> {
        vec![
            Member {
                nombres_completos: "María José".to_string(),
                apellidos_completos: "Pérez, Loor".to_string(),
                cedula: "0912345678".to_string(),
                discapacidad_tipo: "Visual".to_string(),
                discapacidad_porcentaje: "45".to_string(),
                provincia_canton: "Guayas/Daule".to_string(),
                celular: "0987654321".to_string(),
                estado_socio: "Activo".to_string(),
                comite_comision: CommitteeSet::parse("Salud, Deportes"),
                ..Default::default()
            },
            Member {
                nombres_completos: "Luis \"Lucho\"".to_string(),
                apellidos_completos: "Andrade".to_string(),
                cedula: "1712345678".to_string(),
                estado_socio: "Inactivo".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_report_layout() {
        let mut buffer = Vec::new();
        write_csv_report(&sample_members(), &mut buffer).unwrap();
        let content = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert!(content.ends_with('\n'));
        assert_eq!(
            lines[0],
            "Nombres,Apellidos,Cédula,Discapacidad,Porcentaje,Provincia,Celular,Estado,Comisión"
        );
        assert_eq!(
            lines[1],
            "María José,\"Pérez, Loor\",\"0912345678\",Visual,45,Guayas/Daule,0987654321,Activo,\"Salud, Deportes\""
        );
        assert_eq!(lines[2], "\"Luis \"\"Lucho\"\"\",Andrade,\"1712345678\",,,,,Inactivo,\"\"");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let members = sample_members();
        let dir = tempfile::tempdir().unwrap();
        let path = export_csv_to_dir(&members, dir.path()).unwrap();
        assert!(path.ends_with(CSV_FILE_NAME));

        let content = std::fs::read_to_string(&path).unwrap();
        let rows = parse_csv_report(&content);
        assert_eq!(rows.len(), members.len() + 1);
        assert_eq!(rows[0], CSV_HEADERS.to_vec());

        for (row, member) in rows[1..].iter().zip(&members) {
            let expected = vec![
                member.nombres_completos.clone(),
                member.apellidos_completos.clone(),
                member.cedula.clone(),
                member.discapacidad_tipo.clone(),
                member.discapacidad_porcentaje.clone(),
                member.provincia_canton.clone(),
                member.celular.clone(),
                member.estado_socio.clone(),
                member.comite_comision.to_string(),
            ];
            assert_eq!(row, &expected);
        }
    }
}
