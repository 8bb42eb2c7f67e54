//! Placeholder resolution across compiles

use pretty_assertions::assert_eq;
use serde_json::json;
use sitegen_compiler::{
    find_tokens, CompiledProject, ImageCache, ImageStatus, ProjectCompiler, RenderedSources,
    DEFAULT_FALLBACK_DESCRIPTION,
};
use sitegen_ir::WebsiteConfig;
use sitegen_test_utils::{
    fixture_url, restaurant, saas, with_sections, FailingResolver, RecordingResolver,
    UnavailableResolver,
};
use std::collections::BTreeSet;

/// Descriptions a compile of `sources` has to resolve
fn wanted(sources: &RenderedSources) -> BTreeSet<String> {
    sources
        .files
        .iter()
        .flat_map(|f| find_tokens(&f.content))
        .filter(|token| sources.tokens.contains(token))
        .map(|token| {
            sources
                .descriptions
                .get(&token)
                .cloned()
                .unwrap_or_else(|| DEFAULT_FALLBACK_DESCRIPTION.to_string())
        })
        .collect()
}

fn leftover_tokens(project: &CompiledProject) -> Vec<String> {
    project
        .files
        .iter()
        .flat_map(|f| find_tokens(&f.content))
        .collect()
}

#[tokio::test]
async fn second_compile_is_served_from_cache() {
    let compiler = ProjectCompiler::new();
    let config = restaurant();
    let expected = wanted(&compiler.render_sources(&config));
    assert!(!expected.is_empty());

    let resolver = RecordingResolver::new();
    let first = compiler.compile(&config, &ImageCache::new(), &resolver).await;
    assert_eq!(first.image_status, ImageStatus::Complete);
    assert!(leftover_tokens(&first).is_empty());
    assert_eq!(
        resolver.calls().into_iter().collect::<BTreeSet<_>>(),
        expected
    );
    assert_eq!(resolver.call_count(), expected.len());

    resolver.reset();
    let second = compiler.compile(&config, &first.image_cache, &resolver).await;
    assert_eq!(resolver.call_count(), 0);
    assert_eq!(second.files, first.files);
    assert_eq!(second.image_cache, first.image_cache);
}

#[tokio::test]
async fn edited_config_only_requests_new_images() {
    let compiler = ProjectCompiler::new();
    let resolver = RecordingResolver::new();
    let first = compiler
        .compile(&restaurant(), &ImageCache::new(), &resolver)
        .await;
    resolver.reset();

    let mut edited: WebsiteConfig = restaurant();
    edited.hero.image_description = "Lobster rolls on the pier at noon".to_string();
    let second = compiler.compile(&edited, &first.image_cache, &resolver).await;

    assert_eq!(resolver.calls(), vec!["Lobster rolls on the pier at noon"]);
    assert_eq!(second.image_status, ImageStatus::Complete);
    assert!(second.image_cache.contains("Grilled sea bass on a wooden board by the harbor"));
    assert_eq!(second.image_cache.len(), first.image_cache.len() + 1);
}

#[tokio::test]
async fn failed_description_keeps_its_token() {
    let failing = "Chef plating a dish";
    let project = ProjectCompiler::new()
        .compile(&restaurant(), &ImageCache::new(), &FailingResolver::new([failing]))
        .await;

    assert_eq!(
        project.image_status,
        ImageStatus::Partial {
            unresolved: vec![failing.to_string()]
        }
    );
    assert!(project.is_degraded());
    assert_eq!(leftover_tokens(&project).len(), 1);
    assert!(!project.image_cache.contains(failing));
    assert_eq!(
        project.image_cache.get("Dining room at sunset"),
        Some(fixture_url("Dining room at sunset").as_str())
    );
}

#[tokio::test]
async fn unavailable_service_leaves_placeholders_and_cache() {
    let compiler = ProjectCompiler::new();
    let config = restaurant();
    let sources = compiler.render_sources(&config);

    let mut previous = ImageCache::new();
    previous.insert("Something from an earlier compile", "https://images.test/old.jpg");

    let project = compiler
        .compile(&config, &previous, &UnavailableResolver)
        .await;

    assert!(matches!(project.image_status, ImageStatus::Unavailable { .. }));
    assert_eq!(project.files, sources.files);
    assert_eq!(project.image_cache, previous);
}

#[tokio::test]
async fn site_without_images_never_calls_resolver() {
    let resolver = RecordingResolver::new();
    let project = ProjectCompiler::new()
        .compile(&saas(), &ImageCache::new(), &resolver)
        .await;

    assert_eq!(project.image_status, ImageStatus::NoImages);
    assert_eq!(resolver.call_count(), 0);
    assert!(!project.is_degraded());
}

#[tokio::test]
async fn repeated_description_is_requested_once() {
    let config = with_sections(
        json!([{
            "type": "gallery",
            "items": [
                {"imageDescription": "Sunset over the bay"},
                {"imageDescription": "Sunset over the bay"},
                {"imageDescription": "Sunset over the bay"}
            ]
        }]),
        json!([]),
    );
    let resolver = RecordingResolver::new();
    let project = ProjectCompiler::new()
        .compile(&config, &ImageCache::new(), &resolver)
        .await;

    assert_eq!(resolver.calls(), vec!["Sunset over the bay"]);
    assert_eq!(project.image_status, ImageStatus::Complete);
    let url = fixture_url("Sunset over the bay");
    let gallery = project.file("components/sections/Gallery.tsx").unwrap();
    assert_eq!(gallery.content.matches(url.as_str()).count(), 3);
}

#[tokio::test]
async fn literal_img_text_is_left_alone() {
    let config = with_sections(
        json!([{"type": "faq", "items": [{"question": "What is IMG_9?", "answer": "A file name."}]}]),
        json!([]),
    );
    let resolver = RecordingResolver::new();
    let project = ProjectCompiler::new()
        .compile(&config, &ImageCache::new(), &resolver)
        .await;

    assert_eq!(resolver.call_count(), 0);
    assert_eq!(project.image_status, ImageStatus::NoImages);
    let faq = project.file("components/sections/Faq.tsx").unwrap();
    assert!(faq.content.contains("What is IMG_9?"));
}

#[tokio::test]
async fn custom_code_cannot_claim_a_later_image() {
    let code = r#"export default function Promo() {
  return <img src="IMG_1" alt="Borrowed description" />;
}"#;
    let config = with_sections(
        json!([
            {"type": "custom", "componentName": "Promo", "code": code},
            {"type": "gallery", "items": [{"imageDescription": "Harbor at dawn"}]}
        ]),
        json!([]),
    );
    let compiler = ProjectCompiler::new();
    let sources = compiler.render_sources(&config);
    assert_eq!(sources.tokens, vec!["IMG_1"]);
    assert_eq!(sources.descriptions["IMG_1"], "Harbor at dawn");

    let resolver = RecordingResolver::new();
    compiler.compile(&config, &ImageCache::new(), &resolver).await;
    assert_eq!(resolver.calls(), vec!["Harbor at dawn"]);
}
