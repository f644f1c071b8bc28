//! Snippet extraction from generated samples, the way documentation
//! tooling consumes them.

use kiosk_definitions::{define_display_api, display_samples};
use kiosk_gen::codegen::SampleFileBuilder;
use kiosk_gen::regions::{Region, extract, scan, validate};

fn render(module: &str) -> String {
    let api = define_display_api();
    let samples = display_samples();
    let sample = samples
        .iter()
        .find(|s| s.module_name() == module)
        .expect("sample exists");
    SampleFileBuilder::new(&api, sample).unwrap().build().unwrap()
}

#[test]
fn outer_and_core_regions_are_nested() {
    for sample in display_samples() {
        let source = render(&sample.module_name());
        let regions = scan(&source).unwrap();

        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["sample", "sample_core"]);

        let (outer, core): (&Region, &Region) = (&regions[0], &regions[1]);
        assert!(outer.contains(core));
        assert!(validate(&source, &sample.region_tag).is_ok());
    }
}

#[test]
fn core_snippet_of_list_request() {
    let core = extract(&render("list_signs_request"), "sample_core").unwrap();

    assert_eq!(
        core,
        "let request = Empty::default();\n\
         let response = client.list_signs(request).await?;\n\
         for sign in response.signs {\n\
         \x20   writeln!(out, \"Sign: {}\", sign)?;\n\
         }"
    );
}

#[test]
fn core_snippet_of_callable_has_single_dispatch_and_await() {
    let core = extract(&render("get_kiosk_callable"), "sample_core").unwrap();

    assert_eq!(core.matches(".future_call(").count(), 1);
    assert_eq!(core.matches(".await").count(), 1);
    assert!(core.find(".future_call(").unwrap() < core.find("// Do something").unwrap());
    assert!(core.find("// Do something").unwrap() < core.find(".await").unwrap());
}

#[test]
fn outer_snippet_carries_metadata_but_no_markers() {
    let outer = extract(&render("get_kiosk_request"), "sample").unwrap();

    assert!(outer.starts_with("//      calling form: \"Request\""));
    assert!(outer.contains("//        [id=1024]"));
    assert!(outer.contains("pub async fn run("));
    assert!(!outer.contains("[START"));
    assert!(!outer.contains("[END"));
}
