//! Whole-project properties of the compiler

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};
use sitegen_compiler::{
    find_tokens, CompiledProject, Diagnostic, ImageCache, ProjectCompiler, ProjectFile,
    RenderedSources,
};
use sitegen_test_utils::{restaurant, saas, with_sections, DeterministicResolver};
use std::collections::HashSet;

fn entry_files(files: &[ProjectFile]) -> impl Iterator<Item = &ProjectFile> {
    files
        .iter()
        .filter(|f| f.path.ends_with("page.tsx") || f.path == "app/layout.tsx")
}

/// `@/components/...` imports of one file, as project paths
fn local_imports(file: &ProjectFile) -> Vec<String> {
    file.content
        .lines()
        .filter(|l| l.starts_with("import ") && !l.starts_with("import type"))
        .filter_map(|l| l.split("from \"@/").nth(1))
        .filter_map(|rest| rest.strip_suffix("\";"))
        .map(|module| format!("{module}.tsx"))
        .collect()
}

fn assert_no_dangling_imports(files: &[ProjectFile]) {
    let paths: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
    for entry in entry_files(files) {
        for import in local_imports(entry) {
            assert!(
                paths.contains(import.as_str()),
                "{} imports missing {import}",
                entry.path
            );
        }
    }
}

fn section_files(sources: &RenderedSources) -> Vec<&str> {
    sources
        .files
        .iter()
        .map(|f| f.path.as_str())
        .filter(|p| p.starts_with("components/sections/"))
        .collect()
}

fn home(sources: &RenderedSources) -> &str {
    &sources
        .files
        .iter()
        .find(|f| f.path == "app/page.tsx")
        .unwrap()
        .content
}

async fn compile(config: &sitegen_ir::WebsiteConfig) -> CompiledProject {
    ProjectCompiler::new()
        .compile(config, &ImageCache::new(), &DeterministicResolver)
        .await
}

#[tokio::test]
async fn compiling_twice_gives_identical_projects() {
    for config in [restaurant(), saas()] {
        let first = compile(&config).await;
        let second = compile(&config).await;
        assert_eq!(first.files, second.files);
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_eq!(first.image_cache, second.image_cache);
    }
}

#[test]
fn fixtures_have_no_dangling_imports() {
    let compiler = ProjectCompiler::new();
    for config in [restaurant(), saas()] {
        assert_no_dangling_imports(&compiler.render_sources(&config).files);
    }
}

#[test]
fn repeated_kinds_get_numbered_files_in_order() {
    let faq = json!({"type": "faq", "items": [{"question": "Q", "answer": "A"}]});
    let config = with_sections(json!([faq, faq, faq]), json!([]));
    let sources = ProjectCompiler::new().render_sources(&config);

    assert_eq!(
        section_files(&sources),
        vec![
            "components/sections/Faq.tsx",
            "components/sections/Faq2.tsx",
            "components/sections/Faq3.tsx",
        ]
    );

    let home = home(&sources);
    for name in ["Faq", "Faq2", "Faq3"] {
        let import = format!("import {name} from \"@/components/sections/{name}\";");
        assert_eq!(home.matches(&import).count(), 1, "{name} imported once");
    }
    let order: Vec<usize> = ["<Faq />", "<Faq2 />", "<Faq3 />"]
        .iter()
        .map(|tag| home.find(tag).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    let anchors: Vec<bool> = ["faq", "faq2", "faq3"]
        .iter()
        .map(|id| {
            sources
                .files
                .iter()
                .any(|f| f.content.contains(&format!("<section id=\"{id}\"")))
        })
        .collect();
    assert_eq!(anchors, vec![true, true, true]);
}

#[test]
fn identical_section_on_sub_page_reuses_homepage_file() {
    let team = json!({"type": "team", "title": "Crew", "members": [{"name": "Ana", "role": "Chef"}]});
    let config = with_sections(
        json!([team]),
        json!([{"path": "/about", "title": "About", "sections": [team]}]),
    );
    let sources = ProjectCompiler::new().render_sources(&config);

    assert_eq!(section_files(&sources), vec!["components/sections/Team.tsx"]);
    let about = sources
        .files
        .iter()
        .find(|f| f.path == "app/about/page.tsx")
        .unwrap();
    assert!(about
        .content
        .contains("import Team from \"@/components/sections/Team\";"));
    assert!(sources.diagnostics.is_empty());
    assert_no_dangling_imports(&sources.files);
}

#[test]
fn different_section_under_same_name_is_reported() {
    let config = with_sections(
        json!([{"type": "team", "title": "Kitchen", "members": []}]),
        json!([{
            "path": "/about",
            "title": "About",
            "sections": [{"type": "team", "title": "Front of house", "members": []}]
        }]),
    );
    let sources = ProjectCompiler::new().render_sources(&config);

    assert_eq!(section_files(&sources), vec!["components/sections/Team.tsx"]);
    assert_eq!(
        sources.diagnostics,
        vec![Diagnostic::NamingCollision {
            path: "components/sections/Team.tsx".to_string(),
            first_route: "/".to_string(),
            later_route: "/about".to_string(),
        }]
    );
    assert_no_dangling_imports(&sources.files);
}

#[test]
fn unknown_section_type_is_skipped() {
    let config = with_sections(
        json!([
            {"type": "unknown-x", "whatever": true},
            {"type": "faq", "items": []}
        ]),
        json!([]),
    );
    let sources = ProjectCompiler::new().render_sources(&config);

    assert_eq!(section_files(&sources), vec!["components/sections/Faq.tsx"]);
    assert!(!home(&sources).to_lowercase().contains("unknown"));
    assert!(matches!(
        &sources.diagnostics[..],
        [Diagnostic::UnsupportedSection { type_tag, .. }] if type_tag == "unknown-x"
    ));
    assert_eq!(sources.config.sections.len(), 1);
}

#[test]
fn eight_images_mint_six_placeholders() {
    let items: Vec<Value> = (1..=8)
        .map(|i| json!({"imageDescription": format!("Photo number {i}")}))
        .collect();
    let config = with_sections(json!([{"type": "gallery", "items": items}]), json!([]));
    let sources = ProjectCompiler::new().render_sources(&config);

    let tokens: Vec<String> = sources
        .files
        .iter()
        .flat_map(|f| find_tokens(&f.content))
        .collect();
    assert_eq!(tokens.len(), 6);
    assert_eq!(sources.minted, 6);
    assert_eq!(sources.fallbacks, 2);
    assert_eq!(sources.descriptions.len(), 6);
    assert_eq!(sources.descriptions["IMG_1"], "Photo number 1");
}

#[test]
fn write_to_dir_materialises_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let project = ProjectCompiler::new().render_sources(&restaurant());
    let files = project.files.clone();

    let compiled = CompiledProject {
        files: project.files,
        dependencies: Default::default(),
        dev_dependencies: Default::default(),
        config: project.config,
        image_cache: ImageCache::new(),
        image_status: sitegen_compiler::ImageStatus::NoImages,
        diagnostics: project.diagnostics,
    };
    assert_eq!(compiled.write_to_dir(dir.path()).unwrap(), files.len());
    for file in &files {
        let written = std::fs::read_to_string(dir.path().join(&file.path)).unwrap();
        assert_eq!(written, file.content);
    }
}

const KINDS: &[&str] = &["faq", "team", "stats", "about", "custom", "unknown-x"];

fn section(kind: &str, n: usize) -> Value {
    match kind {
        "about" => json!({"type": "about", "title": format!("About {n}"), "body": "Story"}),
        "custom" => json!({
            "type": "custom",
            "componentName": "Widget",
            "code": "export default function Widget() { return null; }"
        }),
        "stats" => json!({"type": "stats", "stats": [{"value": n.to_string(), "label": "Years"}]}),
        other => json!({"type": other, "title": format!("{other} {n}")}),
    }
}

proptest! {
    #[test]
    fn every_import_resolves(home in prop::collection::vec(0..KINDS.len(), 0..8),
                             page in prop::collection::vec(0..KINDS.len(), 0..5)) {
        let home: Vec<Value> = home.iter().enumerate().map(|(n, k)| section(KINDS[*k], n)).collect();
        let page: Vec<Value> = page.iter().enumerate().map(|(n, k)| section(KINDS[*k], n)).collect();
        let supported = home.iter().filter(|s| s["type"] != "unknown-x").count();

        let config = with_sections(
            Value::Array(home),
            json!([{"path": "/more", "title": "More", "sections": page}]),
        );
        let sources = ProjectCompiler::new().render_sources(&config);

        assert_no_dangling_imports(&sources.files);
        let paths: HashSet<&str> = sources.files.iter().map(|f| f.path.as_str()).collect();
        prop_assert_eq!(paths.len(), sources.files.len());
        prop_assert_eq!(local_imports(sources.files.iter().find(|f| f.path == "app/page.tsx").unwrap()).len(), supported + 1);
    }
}
