//! Render orchestration - turns a template plus delimited records into files

use crate::config::MergeOptions;
use crate::error::{FilemergeError, Result};
use crate::path::{resolve_collision, try_sanitize_filename};
use crate::reader;
use crate::record::Record;
use crate::template::{TemplateContext, TemplateEngine};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CONTENT_TEMPLATE: &str = "content";
const FILENAME_TEMPLATE: &str = "filename";

/// Compiled templates for one run
///
/// The content template is registered under its file name in an engine
/// that loads siblings from the template's directory, so `include`,
/// `extends` and `import` resolve next to it. The filename template
/// lives in its own engine and never sees the search path.
struct Templates {
    content: TemplateEngine,
    content_name: String,
    filename: Option<TemplateEngine>,
}

impl Templates {
    fn load(template_path: &Path, options: &MergeOptions) -> Result<Self> {
        let search_dir = template_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let content_name = template_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| CONTENT_TEMPLATE.to_string());

        let mut content = TemplateEngine::with_search_path(search_dir);
        content.load(&content_name, read_text(template_path)?)?;

        let filename = match &options.filename_template {
            Some(pattern) => {
                let mut engine = TemplateEngine::new();
                engine.load(FILENAME_TEMPLATE, pattern.as_str())?;
                Some(engine)
            }
            None => None,
        };

        Ok(Self {
            content,
            content_name,
            filename,
        })
    }

    fn render_content(&self, context: &TemplateContext) -> Result<String> {
        Ok(self.content.render(&self.content_name, context)?)
    }
}

/// Render records from `csv_path` through `template_path`
///
/// # Steps
/// 1. Compile the content template (and the filename template, if any);
///    the content template may include siblings from its own directory
/// 2. Read the records and apply the selection
/// 3. Per-record mode: one file per selected record in `output`,
///    named by the filename template or `output_{i}.txt`, never
///    overwriting an existing file
/// 4. Chunk mode: one file at `output` itself, rendered with all
///    selected records as a single list
///
/// Returns every written path in write order.
///
/// # Errors
///
/// Everything is fatal except a per-record filename render failure, which
/// falls back to the default name. Files written before a fatal error
/// stay on disk.
pub fn render(
    template_path: &Path,
    csv_path: &Path,
    output: &Path,
    options: &MergeOptions,
) -> Result<Vec<PathBuf>> {
    let templates = Templates::load(template_path, options)?;

    let records = reader::read(csv_path, &options.read_options())?;
    let selected = options.select_rows.apply(&records);
    debug!(
        "Selected {} of {} record(s)",
        selected.len(),
        records.len()
    );

    if options.chunk {
        let path = render_chunk(&templates, &selected, output, options)?;
        Ok(vec![path])
    } else {
        render_each(&templates, &selected, output, options)
    }
}

/// Per-record mode
fn render_each(
    templates: &Templates,
    records: &[&Record],
    output_dir: &Path,
    options: &MergeOptions,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| FilemergeError::io(output_dir, e))?;

    let mut written = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let counter = i + 1;
        let context = TemplateContext::from_record(record);

        let content = templates.render_content(&context)?;
        let filename = output_filename(templates, &context, counter, options);

        let path = resolve_collision(&output_dir.join(filename));
        write_output(&path, &content)?;
        written.push(path);
    }

    Ok(written)
}

/// Chunk mode; `output` is a file path here, not a directory
fn render_chunk(
    templates: &Templates,
    records: &[&Record],
    output: &Path,
    options: &MergeOptions,
) -> Result<PathBuf> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FilemergeError::io(parent, e))?;
    }

    let context = TemplateContext::from_records(&options.chunk_name, records);
    let content = templates.render_content(&context)?;

    write_output(output, &content)?;
    Ok(output.to_path_buf())
}

/// Name for the `counter`-th output file
///
/// Falls back to the default name when no filename template is loaded,
/// when it fails to render, or when it renders to nothing usable.
fn output_filename(
    templates: &Templates,
    context: &TemplateContext,
    counter: usize,
    options: &MergeOptions,
) -> String {
    let Some(engine) = &templates.filename else {
        return options.default_filename(counter);
    };

    let rendered = match engine.render(FILENAME_TEMPLATE, context) {
        Ok(rendered) => rendered,
        Err(e) => {
            let fallback = options.default_filename(counter);
            warn!("{}; using '{}' for record {}", e, fallback, counter);
            return fallback;
        }
    };

    match try_sanitize_filename(&rendered) {
        Some(name) if name.contains('.') => name,
        Some(name) => format!("{}.{}", name, options.default_extension),
        None => options.default_filename(counter),
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| FilemergeError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| FilemergeError::Encoding {
        path: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| FilemergeError::io(path, e))?;
    info!("File created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Selection;
    use tempfile::TempDir;

    struct Setup {
        dir: TempDir,
        template: PathBuf,
        csv: PathBuf,
    }

    impl Setup {
        fn new(template: &str, csv: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let template_path = dir.path().join("template.txt");
            let csv_path = dir.path().join("data.csv");
            fs::write(&template_path, template).unwrap();
            fs::write(&csv_path, csv).unwrap();
            Self {
                dir,
                template: template_path,
                csv: csv_path,
            }
        }

        fn out(&self) -> PathBuf {
            self.dir.path().join("out")
        }

        fn run(&self, options: &MergeOptions) -> Result<Vec<PathBuf>> {
            render(&self.template, &self.csv, &self.out(), options)
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_names_follow_selection_counter() {
        let setup = Setup::new("{{ Name }}", "Name\nA\nB\nC\n");
        let options = MergeOptions {
            select_rows: Selection::parse("3,2").unwrap(),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["output_1.txt", "output_2.txt"]);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "B");
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "C");
    }

    #[test]
    fn test_filename_template_without_extension_gets_txt() {
        let setup = Setup::new("x", "Name\nAlice\n");
        let options = MergeOptions {
            filename_template: Some("letter-{{ Name }}".to_string()),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["letter-Alice.txt"]);
    }

    #[test]
    fn test_filename_template_is_sanitized() {
        let setup = Setup::new("x", "Name\nA/B\n");
        let options = MergeOptions {
            filename_template: Some("{{ Name }}.md".to_string()),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["A_B.md"]);
    }

    #[test]
    fn test_empty_filename_falls_back_to_default() {
        let setup = Setup::new("x", "Name\n\n\"\"\nBob\n");
        let options = MergeOptions {
            filename_template: Some("{{ Name }}".to_string()),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["output_1.txt", "Bob.txt"]);
    }

    #[test]
    fn test_filename_render_error_falls_back_per_record() {
        let setup = Setup::new("{{ Name }}", "Name\nAlice\n");
        let options = MergeOptions {
            filename_template: Some("{{ Name.a.b }}".to_string()),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["output_1.txt"]);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "Alice");
    }

    #[test]
    fn test_filename_syntax_error_is_fatal() {
        let setup = Setup::new("x", "Name\nAlice\n");
        let options = MergeOptions {
            filename_template: Some("{{ Name".to_string()),
            ..MergeOptions::default()
        };

        assert!(matches!(
            setup.run(&options),
            Err(FilemergeError::TemplateSyntax(_))
        ));
        assert!(!setup.out().exists());
    }

    #[test]
    fn test_content_render_error_aborts() {
        let setup = Setup::new("{{ Name.a.b }}", "Name\nAlice\n");
        assert!(matches!(
            setup.run(&MergeOptions::default()),
            Err(FilemergeError::TemplateRender(_))
        ));
    }

    #[test]
    fn test_content_render_error_keeps_earlier_files() {
        let setup = Setup::new(
            "{{ Name.a.b if Name == 'Bob' else Name }}",
            "Name\nAlice\nBob\nCarol\n",
        );

        assert!(matches!(
            setup.run(&MergeOptions::default()),
            Err(FilemergeError::TemplateRender(_))
        ));
        let out = setup.out();
        assert_eq!(fs::read_to_string(out.join("output_1.txt")).unwrap(), "Alice");
        assert!(!out.join("output_2.txt").exists());
        assert!(!out.join("output_3.txt").exists());
    }

    #[test]
    fn test_content_template_includes_sibling_file() {
        let setup = Setup::new("{% include 'header.txt' %}Name: {{ Name }}", "Name\nAlice\n");
        fs::write(setup.dir.path().join("header.txt"), "Dear {{ Name }},\n").unwrap();

        let written = setup.run(&MergeOptions::default()).unwrap();
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            "Dear Alice,\nName: Alice"
        );
    }

    #[test]
    fn test_content_template_extends_sibling_layout() {
        let setup = Setup::new(
            "{% extends 'layout.txt' %}{% block body %}Hi {{ Name }}{% endblock %}",
            "Name\nAlice\n",
        );
        fs::write(
            setup.dir.path().join("layout.txt"),
            "[{% block body %}{% endblock %}]",
        )
        .unwrap();

        let written = setup.run(&MergeOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "[Hi Alice]");
    }

    #[test]
    fn test_missing_include_is_render_error() {
        let setup = Setup::new("{% include 'missing.txt' %}", "Name\nAlice\n");
        assert!(matches!(
            setup.run(&MergeOptions::default()),
            Err(FilemergeError::TemplateRender(_))
        ));
    }

    #[test]
    fn test_content_syntax_error_writes_nothing() {
        let setup = Setup::new("{% if %}", "Name\nAlice\n");
        assert!(matches!(
            setup.run(&MergeOptions::default()),
            Err(FilemergeError::TemplateSyntax(_))
        ));
        assert!(!setup.out().exists());
    }

    #[test]
    fn test_same_rendered_name_gets_suffix() {
        let setup = Setup::new("{{ Name }}", "Name,Team\nAlice,red\nBob,red\n");
        let options = MergeOptions {
            filename_template: Some("{{ Team }}.txt".to_string()),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert_eq!(names(&written), vec!["red.txt", "red_1.txt"]);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "Alice");
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "Bob");
    }

    #[test]
    fn test_chunk_mode_writes_single_file() {
        let setup = Setup::new(
            "{% for row in rows %}{{ row.Name }}\n{% endfor %}",
            "Name\nAlice\nBob\n",
        );
        let options = MergeOptions {
            chunk: true,
            ..MergeOptions::default()
        };
        let target = setup.dir.path().join("nested").join("all.txt");

        let written = render(&setup.template, &setup.csv, &target, &options).unwrap();
        assert_eq!(written, vec![target.clone()]);
        assert_eq!(fs::read_to_string(&target).unwrap(), "Alice\nBob\n");
    }

    #[test]
    fn test_chunk_mode_custom_name_and_selection() {
        let setup = Setup::new(
            "{% for p in people %}{{ p.Name }};{% endfor %}",
            "Name\nAlice\nBob\nCarol\n",
        );
        let options = MergeOptions {
            chunk: true,
            chunk_name: "people".to_string(),
            select_rows: Selection::parse("3,1").unwrap(),
            ..MergeOptions::default()
        };
        let target = setup.dir.path().join("all.txt");

        render(&setup.template, &setup.csv, &target, &options).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "Alice;Carol;");
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let setup = Setup::new("{{ Name }}", "Name\nAlice\n");
        let options = MergeOptions {
            select_rows: Selection::parse("5").unwrap(),
            ..MergeOptions::default()
        };

        let written = setup.run(&options).unwrap();
        assert!(written.is_empty());
        assert!(setup.out().is_dir());
    }
}
