//! CMakeLists.txt and package-config generation.
//!
//! Both files are rendered from templates with a context built from the
//! project identity and every resolved dependency (direct and transitive).

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::builder::package_map::PackageMap;
use crate::builder::templates::{
    generated_header, CMAKELISTS_TPL, PACKAGE_CONFIG_TPL, SCAFFOLD_HELP,
};
use crate::core::{GlueError, GlueResult, Registry};
use crate::util::config::Config;
use crate::util::fs::{read_if_exists, write_string};
use crate::util::template::Template;

/// Identity of the project the files are generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Organization, used as CMake namespace
    pub org: String,
    /// Project (and CMake target) name
    pub project: String,
    /// Folder holding the project's own headers
    pub project_srcs: String,
}

impl ProjectInfo {
    pub fn new(
        org: impl Into<String>,
        project: impl Into<String>,
        project_srcs: impl Into<String>,
    ) -> Self {
        ProjectInfo {
            org: org.into(),
            project: project.into(),
            project_srcs: project_srcs.into(),
        }
    }
}

/// Template text at `path`, or `builtin` when there is no such file.
pub fn load_template(path: &Path, builtin: &str) -> String {
    match read_if_exists(path) {
        Some(text) => {
            tracing::info!("Using template {}", path.display());
            text
        }
        None => builtin.to_string(),
    }
}

/// The two template sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub cmakelists: String,
    pub package_config: String,
}

impl Templates {
    pub fn builtin() -> Self {
        Templates {
            cmakelists: CMAKELISTS_TPL.to_string(),
            package_config: PACKAGE_CONFIG_TPL.to_string(),
        }
    }

    /// Project templates where present, built-in ones otherwise.
    pub fn load(config: &Config) -> Self {
        Templates {
            cmakelists: load_template(&config.paths.cmakelists_template, CMAKELISTS_TPL),
            package_config: load_template(
                &config.paths.package_config_template,
                PACKAGE_CONFIG_TPL,
            ),
        }
    }
}

/// Rendered file contents, headers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub cmakelists: String,
    pub package_config: String,
}

/// Build the template context.
///
/// `deps_root` is the dependency folder as seen from the generated
/// CMakeLists.txt.
pub fn template_context(
    project: &ProjectInfo,
    registry: &Registry,
    package_map: &PackageMap,
    deps_root: &str,
) -> GlueResult<Value> {
    let deps = registry
        .iter()
        .map(|desc| {
            let names = desc.names()?;
            let cmake = package_map.names_for(desc)?;

            Ok(json!({
                "cmake_package_name": cmake.package,
                "cmake_target_name": cmake.target,
                "org": names.organization_name,
                "name": names.canonical_name,
                "ref": desc.reference(),
                "include_path": desc.include_path().unwrap_or_default(),
                "include_path_end_backslash": desc.include_path_with_separator(),
                "transitive": desc.is_transitive(),
            }))
        })
        .collect::<GlueResult<Vec<Value>>>()?;

    Ok(json!({
        "org": project.org,
        "project": project.project,
        "project_srcs": project.project_srcs,
        "deps_root": deps_root,
        "deps": deps,
    }))
}

/// Render both files without touching the filesystem.
pub fn render(
    templates: &Templates,
    project: &ProjectInfo,
    registry: &Registry,
    config: &Config,
) -> GlueResult<Rendered> {
    let package_map = PackageMap::with_builtins(&config.package_map)?;
    let deps_root = relative_deps_root(config);
    let context = template_context(project, registry, &package_map, &deps_root)?;

    let cmakelists = render_one(
        &templates.cmakelists,
        &config.paths.cmakelists_template,
        &config.paths.cmakelists,
        &context,
    )?;
    let package_config = render_one(
        &templates.package_config,
        &config.paths.package_config_template,
        &config.paths.package_config,
        &context,
    )?;

    Ok(Rendered {
        cmakelists,
        package_config,
    })
}

/// Render both files and write them, replacing previous contents.
///
/// Returns the written paths.
pub fn generate(
    config: &Config,
    project: &ProjectInfo,
    registry: &Registry,
) -> GlueResult<Vec<PathBuf>> {
    let templates = Templates::load(config);
    let rendered = render(&templates, project, registry, config)?;

    let paths = &config.paths;
    write_string(&paths.cmakelists, &rendered.cmakelists)?;
    write_string(&paths.package_config, &rendered.package_config)?;

    Ok(vec![paths.cmakelists.clone(), paths.package_config.clone()])
}

/// Write the built-in templates to the template paths for customization.
///
/// Returns the written paths.
pub fn emit_template_scaffold(config: &Config) -> GlueResult<Vec<PathBuf>> {
    let paths = &config.paths;

    write_string(
        &paths.cmakelists_template,
        &format!("{}{}", SCAFFOLD_HELP, CMAKELISTS_TPL),
    )?;
    write_string(
        &paths.package_config_template,
        &format!("{}{}", SCAFFOLD_HELP, PACKAGE_CONFIG_TPL),
    )?;

    Ok(vec![
        paths.cmakelists_template.clone(),
        paths.package_config_template.clone(),
    ])
}

fn render_one(
    source: &str,
    template_path: &Path,
    output_path: &Path,
    context: &Value,
) -> GlueResult<String> {
    let template = Template::parse(source).map_err(|source| GlueError::InvalidTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;

    let header = generated_header(&file_name(output_path), &file_name(template_path));
    Ok(format!("{}{}", header, template.render(context)))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Dependency folder relative to the generated CMakeLists.txt.
fn relative_deps_root(config: &Config) -> String {
    let deps_root = &config.paths.deps_root;
    let base = config.paths.cmakelists.parent().unwrap_or(Path::new(""));
    let relative = deps_root.strip_prefix(base).unwrap_or(deps_root);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Descriptor;
    use crate::util::config::PackageMapEntry;
    use tempfile::TempDir;

    fn project() -> ProjectInfo {
        ProjectInfo::new("header-only", "fusion", "fusion")
    }

    fn registry() -> Registry {
        [
            Descriptor::new("boostorg/fusion", "boost-1.66.0"),
            Descriptor::new("acme/widgets", "v1.0")
                .with_include_path("include")
                .with_transitive(true),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_context_shape() {
        let map = PackageMap::with_builtins(&[]).unwrap();
        let ctx = template_context(&project(), &registry(), &map, "deps").unwrap();

        assert_eq!(ctx["project"], "fusion");
        assert_eq!(ctx["deps_root"], "deps");

        let deps = ctx["deps"].as_array().unwrap();
        assert_eq!(deps.len(), 2);

        // identity order: acme/widgets before boostorg/fusion
        assert_eq!(deps[0]["cmake_package_name"], "acme");
        assert_eq!(deps[0]["cmake_target_name"], "acme::widgets");
        assert_eq!(deps[0]["include_path"], "include");
        assert_eq!(deps[0]["include_path_end_backslash"], "include/");
        assert_eq!(deps[0]["transitive"], true);

        assert_eq!(deps[1]["cmake_package_name"], "Boost");
        assert_eq!(deps[1]["cmake_target_name"], "Boost::boost");
        assert_eq!(deps[1]["org"], "boostorg");
        assert_eq!(deps[1]["name"], "fusion");
        assert_eq!(deps[1]["ref"], "boost-1.66.0");
        assert_eq!(deps[1]["include_path_end_backslash"], "");
    }

    #[test]
    fn test_render_substitutes_without_escaping() {
        let templates = Templates {
            cmakelists: "{{#deps}}find_package({{cmake_package_name}}) -> {{cmake_target_name}} {{ref}}\n{{/deps}}".into(),
            package_config: "@PACKAGE_INIT@\n".into(),
        };
        let config = Config::default();

        let rendered = render(&templates, &project(), &registry(), &config).unwrap();
        assert!(rendered
            .cmakelists
            .contains("find_package(acme) -> acme::widgets v1.0\n"));
        assert!(rendered
            .cmakelists
            .contains("find_package(Boost) -> Boost::boost boost-1.66.0\n"));
        assert!(rendered.cmakelists.starts_with("\n# This is an #inglued <> generated CMakeLists.txt"));
        assert!(rendered.package_config.ends_with("@PACKAGE_INIT@\n"));
        assert!(rendered.package_config.contains("generated Config.cmake.in"));
    }

    #[test]
    fn test_configured_override_comes_first() {
        let mut config = Config::default();
        config
            .package_map
            .push(PackageMapEntry::new("acme/.*", "Acme", "Acme::all"));
        let templates = Templates {
            cmakelists: "{{#deps}}{{cmake_target_name}};{{/deps}}".into(),
            package_config: String::new(),
        };

        let rendered = render(&templates, &project(), &registry(), &config).unwrap();
        assert!(rendered.cmakelists.ends_with("Acme::all;Boost::boost;"));
    }

    #[test]
    fn test_invalid_template_names_path() {
        let templates = Templates {
            cmakelists: "{{#deps}}".into(),
            package_config: String::new(),
        };
        let err = render(&templates, &project(), &registry(), &Config::default()).unwrap_err();
        match err {
            GlueError::InvalidTemplate { path, .. } => {
                assert_eq!(path, PathBuf::from("CMakeLists.txt.tpl"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builtin_cmakelists() {
        let rendered = render(
            &Templates::builtin(),
            &project(),
            &registry(),
            &Config::default(),
        )
        .unwrap();

        let out = &rendered.cmakelists;
        assert!(out.contains("project(fusion VERSION \"0.0.1\")"));
        assert!(out.contains("add_library(header-only::fusion ALIAS fusion)"));
        assert!(out.contains("# boostorg/fusion @ boost-1.66.0"));
        assert!(out.contains("target_link_libraries(fusion INTERFACE Boost::boost)"));
        assert!(out.contains("${CMAKE_CURRENT_SOURCE_DIR}/deps/widgets/include>"));
        assert!(out.contains("install(DIRECTORY deps/widgets/include/ DESTINATION"));
        assert!(out.contains("install(DIRECTORY deps/fusion/ DESTINATION"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_generate_writes_both_files() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default().rooted(tmp.path());
        std::fs::write(tmp.path().join("CMakeLists.txt"), "stale").unwrap();

        let written = generate(&config, &project(), &registry()).unwrap();
        assert_eq!(written.len(), 2);

        let cmakelists = std::fs::read_to_string(tmp.path().join("CMakeLists.txt")).unwrap();
        assert!(!cmakelists.contains("stale"));
        assert!(cmakelists.contains("deps/fusion"));
        assert!(tmp.path().join("cmake/modules/Config.cmake.in").exists());
    }

    #[test]
    fn test_generate_reports_unwritable_output() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default().rooted(tmp.path());
        std::fs::write(tmp.path().join("cmake"), "not a directory").unwrap();

        let err = generate(&config, &project(), &registry()).unwrap_err();
        match &err {
            GlueError::WriteFailure { path, .. } => {
                assert_eq!(path, &tmp.path().join("cmake/modules/Config.cmake.in"))
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Config.cmake.in"));
    }

    #[test]
    fn test_generate_prefers_project_template() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default().rooted(tmp.path());
        std::fs::write(
            tmp.path().join("CMakeLists.txt.tpl"),
            "custom {{project}} {{#deps}}[{{name}}]{{/deps}}\n",
        )
        .unwrap();

        generate(&config, &project(), &registry()).unwrap();

        let cmakelists = std::fs::read_to_string(tmp.path().join("CMakeLists.txt")).unwrap();
        assert!(cmakelists.ends_with("custom fusion [widgets][fusion]\n"));
    }

    #[test]
    fn test_scaffold_round_trips_through_generate() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default().rooted(tmp.path());

        let written = emit_template_scaffold(&config).unwrap();
        assert_eq!(written[0], tmp.path().join("CMakeLists.txt.tpl"));
        assert_eq!(written[1], tmp.path().join("cmake/modules/Config.cmake.in.tpl"));

        let tpl = std::fs::read_to_string(&written[0]).unwrap();
        assert!(tpl.contains("This is an #inglued <> template"));
        assert!(tpl.ends_with(CMAKELISTS_TPL));

        generate(&config, &project(), &registry()).unwrap();
        let from_scaffold = std::fs::read_to_string(tmp.path().join("CMakeLists.txt")).unwrap();
        let builtin = render(&Templates::builtin(), &project(), &registry(), &config).unwrap();
        assert_eq!(from_scaffold, builtin.cmakelists);
    }
}
