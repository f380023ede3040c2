use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{ARRAY_LENGTH_MACRO, BIAS_TYPE, DEFINES_INCLUDE, HEADER_GUARD, SCALE_TYPE};
use super::error::HeaderWriterError;
use super::scaler::Coefficients;

/// Join a coefficient vector into the literal list of a C array initializer.
/// f64 Display is the shortest representation that round-trips, so the firmware
/// sees the full precision of the fit.
fn literal_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Render the complete header text for a set of coefficients.
///
/// The layout matches the hand-written firmware headers: include guard, the
/// defines include, then one fixed-size array per coefficient vector.
pub fn render_header(coefficients: &Coefficients) -> String {
    format!(
        "\n#ifndef {guard}\n#define {guard}\n#include \"{defines}\"\n\nstatic const {scale_t} scale[{n}] = {{{scales}}};\nstatic const {bias_t} bias[{n}] = {{{biases}}};\n\n#endif\n",
        guard = HEADER_GUARD,
        defines = DEFINES_INCLUDE,
        scale_t = SCALE_TYPE,
        bias_t = BIAS_TYPE,
        n = ARRAY_LENGTH_MACRO,
        scales = literal_list(&coefficients.scale),
        biases = literal_list(&coefficients.bias),
    )
}

/// Writes the generated header, replacing the destination as a whole.
///
/// The text is staged in a sibling temporary file and renamed over the target,
/// so a failed run cannot leave a truncated header for the firmware build to
/// pick up.
#[derive(Debug)]
pub struct HeaderWriter {
    path: PathBuf,
    temp_path: PathBuf,
}

impl HeaderWriter {
    /// Create a writer for the given destination path
    pub fn new(path: &Path) -> Self {
        let mut temp_name = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        temp_name.push(".tmp");
        Self {
            path: path.to_path_buf(),
            temp_path: path.with_file_name(temp_name),
        }
    }

    /// Render and write the header for the given coefficients
    pub fn write(&self, coefficients: &Coefficients) -> Result<(), HeaderWriterError> {
        let header = render_header(coefficients);
        fs::write(&self.temp_path, header.as_bytes())?;
        fs::rename(&self.temp_path, &self.path)?;
        Ok(())
    }
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    fn example_coefficients() -> Coefficients {
        Coefficients {
            scale: vec![0.5, 0.25],
            bias: vec![1.5, -0.5],
        }
    }

    #[test]
    fn test_render_example() {
        let header = render_header(&example_coefficients());
        assert!(header.contains("static const scale_t scale[N_INPUTS] = {0.5,0.25};"));
        assert!(header.contains("static const bias_t bias[N_INPUTS] = {1.5,-0.5};"));
        assert!(header.starts_with("\n#ifndef L1TMLDEMO_SCALES_H_\n#define L1TMLDEMO_SCALES_H_\n"));
        assert!(header.contains("#include \"defines.h\""));
        assert!(header.ends_with("#endif\n"));
    }

    #[test]
    fn test_render_single_feature() {
        let coeffs = Coefficients {
            scale: vec![2.0],
            bias: vec![-1.0],
        };
        let header = render_header(&coeffs);
        // a single element must still be a valid initializer, no trailing comma
        assert!(header.contains("scale[N_INPUTS] = {2};"));
        assert!(header.contains("bias[N_INPUTS] = {-1};"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let coeffs = example_coefficients();
        assert_eq!(render_header(&coeffs), render_header(&coeffs));
    }

    #[test]
    fn test_literals_round_trip() {
        let coeffs = Coefficients {
            scale: vec![1.0 / 3.0, 0.1, 7.25e-5],
            bias: vec![2.0 / 7.0, -123.456, 0.0],
        };
        let header = render_header(&coeffs);

        let mut arrays: Vec<Vec<f64>> = Vec::new();
        for line in header.lines().filter(|l| l.contains("= {")) {
            let start = line.find('{').unwrap() + 1;
            let end = line.find('}').unwrap();
            arrays.push(
                line[start..end]
                    .split(',')
                    .map(|v| v.parse::<f64>().unwrap())
                    .collect(),
            );
        }
        assert_eq!(arrays.len(), 2);
        assert_eq!(arrays[0], coeffs.scale);
        assert_eq!(arrays[1], coeffs.bias);
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scales.h");
        let writer = HeaderWriter::new(&path);

        writer.write(&example_coefficients()).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, render_header(&example_coefficients()));

        // second run is byte-identical and leaves no staging file behind
        writer.write(&example_coefficients()).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
        assert!(!dir.path().join("scales.h.tmp").exists());
    }
}
