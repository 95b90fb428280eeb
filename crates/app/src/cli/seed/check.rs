use std::path::PathBuf;

use bodegas_app::domain::bodegas::{records::EstadoBodega, seed};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CheckSeedArgs {
    /// JSON seed file to validate
    path: PathBuf,
}

pub(crate) fn run(args: &CheckSeedArgs) -> Result<(), String> {
    println!("{}", summary(args)?);

    Ok(())
}

/// Per-state counts of a valid seed file.
fn summary(args: &CheckSeedArgs) -> Result<String, String> {
    let bodegas = seed::load_seed_file(&args.path)
        .map_err(|error| format!("invalid seed file {}: {error}", args.path.display()))?;

    let mut lines = vec![format!("bodegas: {}", bodegas.len())];

    for estado in EstadoBodega::ALL {
        let count = bodegas
            .iter()
            .filter(|bodega| bodega.estado == estado)
            .count();

        lines.push(format!("{}: {count}", estado.as_str().to_lowercase()));
    }

    lines.push("seed file is valid".to_string());

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    fn bodega(id: &str, codigo: &str, estado: &str) -> Value {
        json!({
            "id": id,
            "codigo": codigo,
            "nombre": format!("Bodega {codigo}"),
            "contratanteNombre": "",
            "contratanteRut": "",
            "contratanteTelefono": "",
            "contratanteEmail": "",
            "metrosCuadrados": 60,
            "piso": 2,
            "estado": estado,
            "tarifaUf": 2.1,
            "fechaContratacion": "",
            "fechaTermino": "",
            "observaciones": "",
        })
    }

    fn seed_file(seed: &Value) -> TestResult<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;

        file.write_all(seed.to_string().as_bytes())?;

        Ok(file)
    }

    #[test]
    fn valid_seed_counts_each_state() -> TestResult {
        let file = seed_file(&json!([
            bodega("X1", "X1", "DISPONIBLE"),
            bodega("X2", "X2", "DISPONIBLE"),
            bodega("X3", "X3", "POR_VENCER"),
        ]))?;

        let output = summary(&CheckSeedArgs {
            path: file.path().to_path_buf(),
        })?;

        assert_eq!(
            output,
            "bodegas: 3\ndisponible: 2\nreservada: 0\nocupada: 0\npor_vencer: 1\nseed file is valid"
        );

        Ok(())
    }

    #[test]
    fn duplicate_codigo_is_reported_with_the_path() -> TestResult {
        let file = seed_file(&json!([
            bodega("X1", "X1", "DISPONIBLE"),
            bodega("X2", "X1", "DISPONIBLE"),
        ]))?;

        let result = summary(&CheckSeedArgs {
            path: file.path().to_path_buf(),
        });

        assert_eq!(
            result,
            Err(format!(
                "invalid seed file {}: duplicate bodega codigo `X1`",
                file.path().display()
            ))
        );

        Ok(())
    }
}
