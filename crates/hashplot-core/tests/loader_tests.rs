use hashplot_core::{load_directory, load_layout_profile, HashScheme, LayoutProfile};

#[test]
fn concatenates_files_in_path_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Written out of order on purpose; the loader sorts by path.
    std::fs::write(
        dir.path().join("batch_b.txt"),
        "img5.png,img6.png,120,9,4,2,0,0,0,0\n",
    )
    .expect("write batch_b");
    std::fs::write(
        dir.path().join("batch_a.txt"),
        "img1.png,img2.png,350,12,7,3,0,0,0,0\nimg3.png,img4.png,80,5,2,1,0,0,0,0\n",
    )
    .expect("write batch_a");

    let (samples, stats) =
        load_directory(dir.path(), &LayoutProfile::default()).expect("load directory");

    assert_eq!(stats.files_loaded, 2);
    assert_eq!(stats.samples_loaded, 3);
    assert_eq!(samples.matches(), &[350.0, 80.0, 120.0]);
    assert_eq!(samples.hashes(HashScheme::Hyperplanes), &[12.0, 5.0, 9.0]);
    assert_eq!(samples.hashes(HashScheme::Histogram), &[7.0, 2.0, 4.0]);
    assert_eq!(samples.hashes(HashScheme::Projections), &[3.0, 1.0, 2.0]);
}

#[test]
fn recurses_into_subdirectories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("run_01").join("logs");
    std::fs::create_dir_all(&nested).expect("create nested dirs");
    std::fs::write(
        nested.join("batch.txt"),
        "a.png,b.png,310,1,2,3,0,0,0,0\n",
    )
    .expect("write nested batch");

    let (samples, stats) =
        load_directory(dir.path(), &LayoutProfile::default()).expect("load directory");

    assert_eq!(stats.files_loaded, 1);
    assert_eq!(samples.matches(), &[310.0]);
}

#[test]
fn skips_comment_and_blank_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("batch.txt"),
        "# header written by the matching node\n\na.png,b.png,42,1,2,3,0,0,0,0\n",
    )
    .expect("write batch");

    let (samples, _) =
        load_directory(dir.path(), &LayoutProfile::default()).expect("load directory");

    assert_eq!(samples.matches(), &[42.0]);
}

#[test]
fn short_record_fails_with_file_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("truncated.txt"), "a.png,b.png,42\n").expect("write file");

    let err = load_directory(dir.path(), &LayoutProfile::default())
        .expect_err("short record must fail");
    let chain = format!("{err:#}");
    assert!(chain.contains("truncated.txt"), "missing file context: {chain}");
    assert!(chain.contains("needs column"), "missing column detail: {chain}");
}

#[test]
fn non_numeric_field_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("bad.txt"),
        "a.png,b.png,n/a,1,2,3,0,0,0,0\n",
    )
    .expect("write file");

    let err =
        load_directory(dir.path(), &LayoutProfile::default()).expect_err("bad number must fail");
    assert!(format!("{err:#}").contains("not a number"));
}

#[test]
fn empty_directory_loads_zero_samples() {
    let dir = tempfile::tempdir().expect("temp dir");

    let (samples, stats) =
        load_directory(dir.path(), &LayoutProfile::default()).expect("load directory");

    assert!(samples.is_empty());
    assert_eq!(stats.files_loaded, 0);
    assert_eq!(stats.samples_loaded, 0);
}

#[test]
fn custom_layout_profile_drives_the_parse() {
    let dir = tempfile::tempdir().expect("temp dir");
    let profile_path = dir.path().join("layout.toml");
    std::fs::write(
        &profile_path,
        "delimiter = \";\"\nmatch_column = 0\nhyperplanes_column = 1\nhistogram_column = 2\nprojections_column = 3\n",
    )
    .expect("write profile");
    let layout = load_layout_profile(&profile_path).expect("load profile");

    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).expect("create data dir");
    std::fs::write(data_dir.join("batch.txt"), "500;10;20;30\n").expect("write batch");

    let (samples, _) = load_directory(&data_dir, &layout).expect("load directory");

    assert_eq!(samples.matches(), &[500.0]);
    assert_eq!(samples.hashes(HashScheme::Projections), &[30.0]);
}
