/// Integration tests for the application layer
mod test_utilities;

use buildpack_tools::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

const LEGACY_BUILDPACK_TOML: &str = r#"# Copyright 2018-2024 the original author or authors.
#
# Licensed under the Apache License, Version 2.0 (the "License");

api = "0.7"

[buildpack]
id = "paketo-buildpacks/bellsoft-liberica"
name = "Paketo Buildpack for BellSoft Liberica"

[[metadata.dependencies]]
id = "jre"
version = "17.0.8"
uri = "https://example.com/jre-17.0.8.tar.gz"
sha256 = "old"
purl = "pkg:generic/bellsoft-jre@17.0.8?arch=amd64"
cpes = ["cpe:2.3:a:oracle:jre:17.0.8:*:*:*:*:*:*:*"]

[[metadata.dependencies]]
id = "jre"
version = "17.0.8"
uri = "https://example.com/jre-17.0.8-aarch64.tar.gz"
sha256 = "old-arm"
purl = "pkg:generic/bellsoft-jre@17.0.8?arch=arm64"
cpes = ["cpe:2.3:a:oracle:jre:17.0.8:*:*:*:*:*:*:*"]

[[metadata.dependencies]]
id = "jdk"
version = "17.0.8"
uri = "https://example.com/jdk-17.0.8.tar.gz"
sha256 = "old-jdk"
"#;

const PREFIXED_EXTENSION_TOML: &str = r#"api = "0.7"

[extension]
id = "paketo-buildpacks/ubi-java-extension"

[[metadata.dependencies]]
id = "node"
version = "18.17.0"
uri = "https://example.com/node-18.17.0.tar.gz"
checksum = "sha256:old"
source-checksum = "sha256:old-source"
purls = ["pkg:generic/node@18.17.0?arch=amd64"]
"#;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn jre_request(path: PathBuf, eol_id: Option<&str>) -> BuildModuleDependencyRequest {
    BuildModuleDependencyRequest {
        buildmodule_path: path,
        update: DependencyUpdate {
            id: "jre".to_string(),
            arch: "amd64".to_string(),
            version: "17.0.9".to_string(),
            uri: "https://example.com/jre-17.0.9.tar.gz".to_string(),
            sha256: "new".to_string(),
            purl: "17.0.9".to_string(),
            cpe: "17.0.9".to_string(),
            source: None,
            source_sha256: None,
            eol_id: eol_id.map(str::to_string),
        },
        version_pattern: r"17\.[\d]+\.[\d]+".to_string(),
        purl_pattern: r"17\.[\d]+\.[\d]+".to_string(),
        cpe_pattern: r"17\.[\d]+\.[\d]+".to_string(),
    }
}

#[test]
fn test_build_module_update_legacy_scheme() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "buildpack.toml", LEGACY_BUILDPACK_TOML);

    let eol = MockEolRepository::new().with_date("java", "17.0.9", "2029-09-30T00:00:00Z");
    let reporter = MockProgressReporter::new();
    let use_case =
        UpdateBuildModuleDependencyUseCase::new(FileSystemStore::new(), eol.clone(), reporter.clone());

    let matched = use_case.execute(jre_request(path.clone(), Some("java"))).unwrap();
    assert_eq!(matched, 1);
    assert_eq!(eol.lookup_count(), 1);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(
        "# Copyright 2018-2024 the original author or authors.\n#\n# Licensed under the Apache License, Version 2.0 (the \"License\");\n\n"
    ));

    let document = ConfigDocument::parse(&content).unwrap();
    let dependencies = document.table("metadata").unwrap()["dependencies"]
        .as_array()
        .unwrap();

    let amd64 = dependencies[0].as_table().unwrap();
    assert_eq!(amd64["version"].as_str(), Some("17.0.9"));
    assert_eq!(amd64["sha256"].as_str(), Some("new"));
    assert_eq!(amd64["deprecation_date"].as_str(), Some("2029-09-30T00:00:00Z"));
    assert_eq!(
        amd64["purl"].as_str(),
        Some("pkg:generic/bellsoft-jre@17.0.9?arch=amd64")
    );
    assert_eq!(
        amd64["cpes"].as_array().unwrap()[0].as_str(),
        Some("cpe:2.3:a:oracle:jre:17.0.9:*:*:*:*:*:*:*")
    );
    assert!(!amd64.contains_key("checksum"));

    let arm64 = dependencies[1].as_table().unwrap();
    assert_eq!(arm64["version"].as_str(), Some("17.0.8"));
    assert_eq!(arm64["sha256"].as_str(), Some("old-arm"));

    let jdk = dependencies[2].as_table().unwrap();
    assert_eq!(jdk["version"].as_str(), Some("17.0.8"));

    assert!(reporter.contains("Updated 1 dependency record(s)"));
}

#[test]
fn test_build_module_update_single_record_keeps_license_header() {
    let temp_dir = TempDir::new().unwrap();
    let header = "# Copyright 2018-2020 the original author or authors.\n#\n# Licensed under the Apache License, Version 2.0 (the \"License\");\n# you may not use this file except in compliance with the License.\n\n";
    let path = write_file(
        temp_dir.path(),
        "buildpack.toml",
        &format!(
            "{}api = \"0.7\"\n\n[[metadata.dependencies]]\nid = \"test-id\"\nname = \"Test Name\"\nversion = \"test-version-1\"\nuri = \"test-uri-1\"\nsha256 = \"test-sha256-1\"\nstacks = [\"test-stack\"]\n",
            header
        ),
    );

    let use_case = UpdateBuildModuleDependencyUseCase::new(
        FileSystemStore::new(),
        MockEolRepository::new(),
        MockProgressReporter::new(),
    );
    let matched = use_case
        .execute(BuildModuleDependencyRequest {
            buildmodule_path: path.clone(),
            update: DependencyUpdate {
                id: "test-id".to_string(),
                arch: "amd64".to_string(),
                version: "test-version-2".to_string(),
                uri: "test-uri-2".to_string(),
                sha256: "test-sha256-2".to_string(),
                purl: "test-version-2".to_string(),
                cpe: "test-version-2".to_string(),
                source: None,
                source_sha256: None,
                eol_id: None,
            },
            version_pattern: r"test-version-[\d]".to_string(),
            purl_pattern: r"test-version-[\d]".to_string(),
            cpe_pattern: r"test-version-[\d]".to_string(),
        })
        .unwrap();
    assert_eq!(matched, 1);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(header));

    let document = ConfigDocument::parse(&content).unwrap();
    let record = document.table("metadata").unwrap()["dependencies"].as_array().unwrap()[0]
        .as_table()
        .unwrap()
        .clone();
    assert_eq!(record.len(), 6);
    assert_eq!(record["id"].as_str(), Some("test-id"));
    assert_eq!(record["name"].as_str(), Some("Test Name"));
    assert_eq!(record["version"].as_str(), Some("test-version-2"));
    assert_eq!(record["uri"].as_str(), Some("test-uri-2"));
    assert_eq!(record["sha256"].as_str(), Some("test-sha256-2"));
    assert_eq!(record["stacks"].as_array().unwrap()[0].as_str(), Some("test-stack"));
    assert_eq!(document.root()["api"].as_str(), Some("0.7"));
}

#[test]
fn test_build_module_update_prefixed_scheme() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "extension.toml", PREFIXED_EXTENSION_TOML);

    let eol = MockEolRepository::new().with_date("nodejs", "18.18.0", "2025-04-30T00:00:00Z");
    let use_case = UpdateBuildModuleDependencyUseCase::new(
        FileSystemStore::new(),
        eol,
        MockProgressReporter::new(),
    );

    let request = BuildModuleDependencyRequest {
        buildmodule_path: path.clone(),
        update: DependencyUpdate {
            id: "node".to_string(),
            arch: "amd64".to_string(),
            version: "18.18.0".to_string(),
            uri: "https://example.com/node-18.18.0.tar.gz".to_string(),
            sha256: "new".to_string(),
            purl: "18.18.0".to_string(),
            cpe: "18.18.0".to_string(),
            source: Some("https://example.com/node-18.18.0-src.tar.gz".to_string()),
            source_sha256: Some("new-source".to_string()),
            eol_id: Some("nodejs".to_string()),
        },
        version_pattern: r"18\..*".to_string(),
        purl_pattern: r"18\.[\d]+\.[\d]+".to_string(),
        cpe_pattern: r"18\.[\d]+\.[\d]+".to_string(),
    };
    assert_eq!(use_case.execute(request).unwrap(), 1);

    let document = ConfigDocument::parse(&fs::read_to_string(&path).unwrap()).unwrap();
    let record = document.table("metadata").unwrap()["dependencies"].as_array().unwrap()[0]
        .as_table()
        .unwrap()
        .clone();

    assert_eq!(record["checksum"].as_str(), Some("sha256:new"));
    assert_eq!(record["source-checksum"].as_str(), Some("sha256:new-source"));
    assert_eq!(
        record["source"].as_str(),
        Some("https://example.com/node-18.18.0-src.tar.gz")
    );
    assert_eq!(record["eol-date"].as_str(), Some("2025-04-30T00:00:00Z"));
    assert_eq!(
        record["purls"].as_array().unwrap()[0].as_str(),
        Some("pkg:generic/node@18.18.0?arch=amd64")
    );
    assert!(!record.contains_key("sha256"));
    assert!(!record.contains_key("deprecation_date"));
}

#[test]
fn test_build_module_eol_failure_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "buildpack.toml", LEGACY_BUILDPACK_TOML);

    let use_case = UpdateBuildModuleDependencyUseCase::new(
        FileSystemStore::new(),
        MockEolRepository::with_failure(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(jre_request(path.clone(), Some("java")))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("java"));
    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_BUILDPACK_TOML);
}

#[test]
fn test_build_module_missing_dependencies_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let original = "[buildpack]\nid = \"paketo-buildpacks/java\"\n";
    let path = write_file(temp_dir.path(), "buildpack.toml", original);

    let use_case = UpdateBuildModuleDependencyUseCase::new(
        FileSystemStore::new(),
        MockEolRepository::new(),
        MockProgressReporter::new(),
    );

    assert!(use_case.execute(jre_request(path.clone(), None)).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_package_update_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let builder = write_file(
        temp_dir.path(),
        "builder.toml",
        "# builder header\n\n[[buildpacks]]\nuri = \"docker://gcr.io/paketo-buildpacks/java:10.0.0\"\n\n[[buildpacks]]\nuri = \"docker://gcr.io/paketo-buildpacks/go:4.0.0\"\n",
    );
    let package = write_file(
        temp_dir.path(),
        "package.toml",
        "[[dependencies]]\nuri = \"docker://gcr.io/paketo-buildpacks/java:10.0.0\"\n",
    );

    let reporter = MockProgressReporter::new();
    let use_case = UpdatePackageDependencyUseCase::new(FileSystemStore::new(), reporter.clone());
    use_case
        .execute(PackageDependencyRequest {
            builder_path: Some(builder.clone()),
            package_path: Some(package.clone()),
            buildpack_path: None,
            id: "gcr.io/paketo-buildpacks/java".to_string(),
            version: "10.1.0".to_string(),
        })
        .unwrap();

    let builder_content = fs::read_to_string(&builder).unwrap();
    assert!(builder_content.starts_with("# builder header\n\n"));
    assert!(builder_content.contains("docker://gcr.io/paketo-buildpacks/java:10.1.0"));
    assert!(builder_content.contains("docker://gcr.io/paketo-buildpacks/go:4.0.0"));
    assert!(fs::read_to_string(&package)
        .unwrap()
        .contains("docker://gcr.io/paketo-buildpacks/java:10.1.0"));
    assert!(reporter.contains("Updated"));
}

#[test]
fn test_lifecycle_update_rewrites_uri() {
    let temp_dir = TempDir::new().unwrap();
    let builder = write_file(
        temp_dir.path(),
        "builder.toml",
        "[lifecycle]\nuri = \"https://github.com/buildpacks/lifecycle/releases/download/v0.16.0/lifecycle-v0.16.0+linux.x86-64.tgz\"\n",
    );

    UpdateBuilderUseCase::new(FileSystemStore::new(), MockProgressReporter::new())
        .execute(&builder, BuilderDependency::Lifecycle, "0.17.1")
        .unwrap();

    assert!(fs::read_to_string(&builder).unwrap().contains(
        "https://github.com/buildpacks/lifecycle/releases/download/v0.17.1/lifecycle-v0.17.1+linux.x86-64.tgz"
    ));
}

#[test]
fn test_build_image_update() {
    let temp_dir = TempDir::new().unwrap();
    let builder = write_file(
        temp_dir.path(),
        "builder.toml",
        "[stack]\nid = \"io.buildpacks.stacks.jammy\"\nbuild-image = \"docker.io/paketobuildpacks/build-jammy-base:0.1.0\"\n",
    );

    UpdateBuilderUseCase::new(FileSystemStore::new(), MockProgressReporter::new())
        .execute(&builder, BuilderDependency::BuildImage, "0.1.5")
        .unwrap();

    assert!(fs::read_to_string(&builder)
        .unwrap()
        .contains("docker.io/paketobuildpacks/build-jammy-base:0.1.5"));
}

fn bundler(
    executor: MockCommandExecutor,
    reporter: MockProgressReporter,
) -> BundleBuildpackUseCase<FileSystemStore, MockCommandExecutor, MockProgressReporter> {
    let config = ToolConfig {
        arch: Some("arm64".to_string()),
        ..Default::default()
    };
    BundleBuildpackUseCase::new(FileSystemStore::new(), executor, reporter, config)
}

#[test]
fn test_bundle_component_buildpack() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "cmd/main/main.go", "package main\n");
    write_file(temp_dir.path(), "buildpack.toml", "[buildpack]\nid = \"x\"\n");

    let executor = MockCommandExecutor::new().with_output("git", "v2.3.4\n");
    let use_case = bundler(executor.clone(), MockProgressReporter::new());

    let mut request = BundleRequest::new("paketobuildpacks/x", temp_dir.path());
    request.options.include_dependencies = true;
    request.options.dependency_filters = vec!["jre".to_string()];
    use_case.execute(&request).unwrap();

    let executions = executor.get_executions();
    let commands: Vec<&str> = executions.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, vec!["git", "create-package", "pack", "docker"]);

    let create_package = &executions[1];
    assert!(create_package
        .args
        .windows(2)
        .any(|pair| pair == ["--version", "2.3.4"]));
    assert!(create_package
        .args
        .contains(&"--include-dependencies".to_string()));
    assert!(create_package
        .args
        .windows(2)
        .any(|pair| pair == ["--dependency-filter", "jre"]));

    let pack = &executions[2];
    assert_eq!(
        pack.args[..5],
        [
            "buildpack",
            "package",
            "paketobuildpacks/x",
            "--pull-policy",
            "if-not-present"
        ]
    );
    assert!(pack.args.windows(2).any(|pair| pair == ["--target", "linux/arm64"]));
    assert_ne!(pack.working_dir.as_deref(), Some(temp_dir.path()));
}

#[test]
fn test_bundle_composite_buildpack() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "buildpack.toml",
        "[buildpack]\nid = \"paketobuildpacks/java\"\n",
    );
    write_file(
        temp_dir.path(),
        "package.toml",
        "[[dependencies]]\nuri = \"docker://gcr.io/paketo-buildpacks/jvm:1.0.0\"\n",
    );

    let executor = MockCommandExecutor::new().with_output("docker", "sha256:aaa\nsha256:bbb\n");
    let reporter = MockProgressReporter::new();
    let use_case = bundler(executor.clone(), reporter.clone());

    let mut request = BundleRequest::new("paketobuildpacks/java", temp_dir.path());
    request.version = Some("1.0.0".to_string());
    request.options.publish = true;
    request.options.registry_name = Some("docker.io/me/java".to_string());
    use_case.execute(&request).unwrap();

    let executions = executor.get_executions();
    let commands: Vec<&str> = executions.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, vec!["pack", "docker", "docker"]);

    let pack = &executions[0];
    assert_eq!(pack.working_dir.as_deref(), Some(temp_dir.path()));
    assert_eq!(pack.args[2], "docker.io/me/java");
    assert!(pack.args.contains(&"--publish".to_string()));
    assert!(pack.args.contains(&"--flatten".to_string()));
    assert!(!pack.args.contains(&"--target".to_string()));
    assert!(pack.args.contains(&"--config".to_string()));

    let remove = &executions[2];
    assert_eq!(
        remove.args,
        vec!["image", "rm", "-f", "sha256:aaa", "sha256:bbb"]
    );
    assert!(reporter.contains("Package Buildpack: paketobuildpacks/java"));
}

#[test]
fn test_bundle_failure_is_propagated() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "cmd/main/main.go", "package main\n");

    let executor = MockCommandExecutor::new().with_failure("create-package");
    let use_case = bundler(executor.clone(), MockProgressReporter::new());

    let mut request = BundleRequest::new("paketobuildpacks/x", temp_dir.path());
    request.version = Some("1.0.0".to_string());

    let err = use_case.execute(&request).unwrap_err();
    assert!(err.to_string().contains("unable to compile buildpack"));
    assert_eq!(executor.get_executions().len(), 1);
}

const JVM_VENDORS_TOML: &str = r#"# JVM vendors

[buildpack]
id = "paketo-buildpacks/jvm-vendors"
name = "JVM Vendors"
version = "{{.version}}"

[[metadata.configurations]]
name = "BP_JVM_VENDORS"
default = "adoptium,azul-zulu"

[[metadata.configurations]]
name = "BP_JVM_VENDOR"
default = "adoptium"

[[metadata.dependencies]]
id = "jre-adoptium"
version = "17.0.9"

[[metadata.dependencies]]
id = "jre-azul-zulu"
version = "17.0.9"

[[metadata.dependencies]]
id = "jdk-azul-zulu"
version = "17.0.9"
"#;

fn jvm_use_case(
    executor: MockCommandExecutor,
    reporter: MockProgressReporter,
) -> BuildJvmVendorsUseCase<FileSystemStore, MockCommandExecutor, MockProgressReporter> {
    BuildJvmVendorsUseCase::new(
        bundler(executor, reporter),
        JvmVendorCatalog::embedded().unwrap(),
    )
}

fn jvm_checkout(dir: &Path) -> PathBuf {
    let buildpack_toml = write_file(dir, "buildpack.toml", JVM_VENDORS_TOML);
    write_file(dir, "package.toml", "");
    buildpack_toml
}

#[test]
fn test_jvm_vendors_multiple_buildpacks() {
    let temp_dir = TempDir::new().unwrap();
    let buildpack_toml = jvm_checkout(temp_dir.path());

    let executor = MockCommandExecutor::new();
    let reporter = MockProgressReporter::new();
    let use_case = jvm_use_case(executor.clone(), reporter.clone());

    use_case
        .execute(&JvmVendorsRequest {
            buildpack_ids: vec![
                "paketo-buildpacks/adoptium@1.0.0".to_string(),
                "paketo-buildpacks/azul-zulu@2.0.0".to_string(),
            ],
            buildpack_path: Some(temp_dir.path().to_path_buf()),
            vendors: vec!["adoptium".to_string(), "azul-zulu".to_string()],
            ..Default::default()
        })
        .unwrap();

    let executions = executor.get_executions();
    let images: Vec<&str> = executions
        .iter()
        .filter(|e| e.command == "pack")
        .map(|e| e.args[2].as_str())
        .collect();
    assert_eq!(
        images,
        vec!["paketo-buildpacks/adoptium", "paketo-buildpacks/azul-zulu"]
    );
    // dangling images are only cleaned up after the last build
    assert_eq!(executions.last().unwrap().command, "docker");
    assert_eq!(executions.iter().filter(|e| e.command == "docker").count(), 1);

    assert_eq!(fs::read_to_string(&buildpack_toml).unwrap(), JVM_VENDORS_TOML);
    assert!(!temp_dir.path().join("buildpack.toml.bak").exists());
    assert!(reporter.contains("Progress: 1/2 - Building paketo-buildpacks/adoptium@1.0.0"));
    assert!(reporter.contains("Progress: 2/2 - Building paketo-buildpacks/azul-zulu@2.0.0"));
}

#[test]
fn test_jvm_vendors_single_buildpack() {
    let temp_dir = TempDir::new().unwrap();
    let buildpack_toml = jvm_checkout(temp_dir.path());

    let executor = MockCommandExecutor::new();
    let reporter = MockProgressReporter::new();
    let use_case = jvm_use_case(executor.clone(), reporter.clone());

    use_case
        .execute(&JvmVendorsRequest {
            buildpack_ids: vec!["paketo-buildpacks/jvm-vendors@3.0.0".to_string()],
            buildpack_path: Some(temp_dir.path().to_path_buf()),
            vendors: vec!["azul-zulu".to_string(), "bellsoft-liberica".to_string()],
            single_buildpack: true,
            ..Default::default()
        })
        .unwrap();

    let packs = executor
        .get_executions()
        .into_iter()
        .filter(|e| e.command == "pack")
        .count();
    assert_eq!(packs, 1);
    assert!(reporter.contains("Using default vendor bellsoft-liberica"));
    assert_eq!(fs::read_to_string(&buildpack_toml).unwrap(), JVM_VENDORS_TOML);
    assert!(!temp_dir.path().join("buildpack.toml.bak").exists());
}

#[test]
fn test_jvm_vendors_refuses_existing_backup() {
    let temp_dir = TempDir::new().unwrap();
    let buildpack_toml = jvm_checkout(temp_dir.path());
    write_file(temp_dir.path(), "buildpack.toml.bak", "stale");

    let executor = MockCommandExecutor::new();
    let use_case = jvm_use_case(executor.clone(), MockProgressReporter::new());

    let err = use_case
        .execute(&JvmVendorsRequest {
            buildpack_ids: vec!["paketo-buildpacks/adoptium@1.0.0".to_string()],
            buildpack_path: Some(temp_dir.path().to_path_buf()),
            vendors: vec!["adoptium".to_string()],
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::BackupExists { .. })
    ));
    assert!(executor.get_executions().is_empty());
    assert_eq!(fs::read_to_string(&buildpack_toml).unwrap(), JVM_VENDORS_TOML);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("buildpack.toml.bak")).unwrap(),
        "stale"
    );
}

#[test]
fn test_jvm_vendors_restores_after_failed_build() {
    let temp_dir = TempDir::new().unwrap();
    let buildpack_toml = jvm_checkout(temp_dir.path());

    let executor = MockCommandExecutor::new().with_failure("pack");
    let use_case = jvm_use_case(executor, MockProgressReporter::new());

    let result = use_case.execute(&JvmVendorsRequest {
        buildpack_ids: vec!["paketo-buildpacks/adoptium@1.0.0".to_string()],
        buildpack_path: Some(temp_dir.path().to_path_buf()),
        vendors: vec!["adoptium".to_string()],
        ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&buildpack_toml).unwrap(), JVM_VENDORS_TOML);
    assert!(!temp_dir.path().join("buildpack.toml.bak").exists());
}

#[test]
fn test_jvm_vendors_unknown_vendor() {
    let temp_dir = TempDir::new().unwrap();
    jvm_checkout(temp_dir.path());

    let use_case = jvm_use_case(MockCommandExecutor::new(), MockProgressReporter::new());
    let err = use_case
        .execute(&JvmVendorsRequest {
            buildpack_ids: vec!["paketo-buildpacks/acme@1.0.0".to_string()],
            buildpack_path: Some(temp_dir.path().to_path_buf()),
            vendors: vec!["acme".to_string()],
            ..Default::default()
        })
        .unwrap_err();

    assert!(err.to_string().contains("invalid vendor: acme"));
    assert!(!temp_dir.path().join("buildpack.toml.bak").exists());
}

#[test]
fn test_jvm_vendors_mismatched_ids_and_vendors() {
    let temp_dir = TempDir::new().unwrap();
    let buildpack_toml = jvm_checkout(temp_dir.path());

    let use_case = jvm_use_case(MockCommandExecutor::new(), MockProgressReporter::new());
    let err = use_case
        .execute(&JvmVendorsRequest {
            buildpack_ids: vec!["paketo-buildpacks/adoptium@1.0.0".to_string()],
            buildpack_path: Some(temp_dir.path().to_path_buf()),
            vendors: vec!["adoptium".to_string(), "azul-zulu".to_string()],
            ..Default::default()
        })
        .unwrap_err();

    assert!(format!("{:#}", err).contains("must match number of selected vendors"));
    assert_eq!(fs::read_to_string(&buildpack_toml).unwrap(), JVM_VENDORS_TOML);
}
