//! End-to-end tests: generate the Display samples into a temp directory and
//! verify the written files.

use std::fs;

use tempfile::TempDir;

use kiosk_definitions::{define_display_api, display_samples};
use kiosk_gen::check::{check_file, sample_files};
use kiosk_gen::header::parse_header;
use kiosk_gen::output::generate_and_write;

fn generate_into_temp() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    generate_and_write(
        &define_display_api(),
        &display_samples(),
        temp_dir.path(),
        false,
    )
    .expect("Failed to generate samples");
    temp_dir
}

#[test]
fn every_written_sample_passes_check() {
    let temp_dir = generate_into_temp();
    let api = define_display_api();
    let samples = display_samples();

    let files = sample_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), samples.len());

    for file in files {
        if let Err(e) = check_file(&file, &api, &samples) {
            panic!("{} failed check: {}", file.display(), e);
        }
    }
}

#[test]
fn each_descriptor_maps_to_exactly_one_file() {
    let temp_dir = generate_into_temp();

    for sample in display_samples() {
        let path = temp_dir.path().join(format!("{}.rs", sample.module_name()));
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("missing {}: {}", path.display(), e));

        assert_eq!(parse_header(&source).unwrap(), sample);
        assert_eq!(source.matches("pub async fn run(").count(), 1);
    }
}

#[test]
fn mod_rs_is_valid_rust() {
    let temp_dir = generate_into_temp();
    let mod_rs = fs::read_to_string(temp_dir.path().join("mod.rs")).unwrap();

    let file = syn::parse_file(&mod_rs).expect("mod.rs should parse");
    let modules = file
        .items
        .iter()
        .filter(|item| matches!(item, syn::Item::Mod(_)))
        .count();
    assert_eq!(modules, display_samples().len());
}

#[test]
fn regeneration_is_stable() {
    let first = generate_into_temp();
    let second = generate_into_temp();

    for file in sample_files(first.path()).unwrap() {
        let name = file.file_name().unwrap();
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            fs::read_to_string(second.path().join(name)).unwrap(),
            "{:?} differs between runs",
            name
        );
    }
}

#[test]
fn no_temp_files_are_left_behind() {
    let temp_dir = generate_into_temp();

    let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
