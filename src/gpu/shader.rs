use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Errors from WGSL loading, parsing, or validation.
///
/// Parse and validation failures carry the rendered, source-spanned
/// diagnostic so a broken shader reports the offending line instead of an
/// opaque error code.
#[derive(Debug)]
pub enum ShaderError {
    /// Failed to read the shader file.
    Io(std::io::Error),
    /// WGSL syntax error, with the rendered diagnostic.
    Parse(String),
    /// Module-level validation failure, with the rendered diagnostic.
    Validation(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read shader: {e}"),
            Self::Parse(diag) => write!(f, "WGSL parse error:\n{diag}"),
            Self::Validation(diag) => {
                write!(f, "WGSL validation error:\n{diag}")
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) | Self::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ShaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A parsed and validated WGSL shader.
///
/// Parsing and validating with naga up front (instead of handing raw
/// source to `create_shader_module`) surfaces errors before any pipeline
/// is built and keeps diagnostics testable without a GPU device. The
/// pre-validated IR is handed to wgpu via its `naga-ir` feature.
pub struct ShaderSource {
    label: String,
    module: naga::Module,
}

impl ShaderSource {
    /// Parse and validate a WGSL source string.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Parse`] or [`ShaderError::Validation`] with
    /// the rendered diagnostic.
    pub fn from_wgsl(
        label: impl Into<String>,
        source: &str,
    ) -> Result<Self, ShaderError> {
        let label = label.into();

        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| ShaderError::Parse(e.emit_to_string(source)))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        );
        let _info = validator
            .validate(&module)
            .map_err(|e| ShaderError::Validation(e.emit_to_string(source)))?;

        Ok(Self { label, module })
    }

    /// Read, parse, and validate a WGSL file.
    ///
    /// The file stem becomes the module label.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::Io`] if the file cannot be read, otherwise
    /// as [`Self::from_wgsl`].
    pub fn from_path(path: &Path) -> Result<Self, ShaderError> {
        let source = std::fs::read_to_string(path)?;
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("shader")
            .to_owned();
        Self::from_wgsl(label, &source)
    }

    /// The shader's label (used for the wgpu module).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Create the wgpu shader module from the validated IR.
    #[must_use]
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&self.label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(self.module.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ShaderError, ShaderSource};

    /// Every WGSL file shipped with the demos.
    fn all_shader_sources() -> Vec<(&'static str, &'static str)> {
        vec![
            (
                include_str!(
                    "../../assets/shaders/coordinate_systems.wgsl"
                ),
                "coordinate_systems.wgsl",
            ),
            (
                include_str!("../../assets/shaders/fly_camera.wgsl"),
                "fly_camera.wgsl",
            ),
        ]
    }

    #[test]
    fn all_shipped_shaders_validate() {
        for (source, file_path) in all_shader_sources() {
            let _ = ShaderSource::from_wgsl(file_path, source)
                .unwrap_or_else(|e| {
                    panic!("shader '{file_path}' failed: {e}")
                });
        }
    }

    #[test]
    fn from_path_labels_by_file_stem() {
        let path = std::env::temp_dir().join("glint_fullscreen_point.wgsl");
        std::fs::write(
            &path,
            "@vertex fn vs_main() -> @builtin(position) vec4<f32> {\
             return vec4<f32>(0.0); }",
        )
        .unwrap();

        let shader = ShaderSource::from_path(&path);
        let _ = std::fs::remove_file(&path);

        match shader {
            Ok(shader) => {
                assert_eq!(shader.label(), "glint_fullscreen_point");
            }
            Err(e) => panic!("expected valid shader, got {e}"),
        }
    }

    #[test]
    fn missing_file_reports_io_error() {
        let missing =
            std::path::Path::new("assets/shaders/does_not_exist.wgsl");
        match ShaderSource::from_path(missing) {
            Err(ShaderError::Io(_)) => {}
            Err(other) => panic!("expected Io error, got {other}"),
            Ok(_) => panic!("expected missing-file failure"),
        }
    }

    #[test]
    fn syntax_error_reports_parse_diagnostic() {
        let err = ShaderSource::from_wgsl("broken", "fn {")
            .err()
            .unwrap_or_else(|| panic!("expected parse failure"));
        match err {
            ShaderError::Parse(diag) => assert!(!diag.is_empty()),
            other => panic!("expected Parse error, got {other}"),
        }
    }
}
