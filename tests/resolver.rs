use codexray::core::paths::absolutize;
use codexray::core::ProjectIndex;
use codexray::parsers::ImportRef;
use codexray::resolvers::csharp::CSharpResolver;
use codexray::resolvers::gdscript::GDScriptResolver;
use codexray::resolvers::go::{external_name, GoResolver};
use codexray::resolvers::javascript::{package_name, JavaScriptResolver};
use codexray::resolvers::python::PythonResolver;
use codexray::resolvers::rust::RustResolver;
use codexray::resolvers::{ImportResolver, Resolution, ResolveContext};
use std::fs;
use tempfile::TempDir;

fn project(files: &[&str]) -> (TempDir, ProjectIndex) {
    let dir = TempDir::new().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
    let root = absolutize(dir.path());
    let index = ProjectIndex::new(&root, files.iter().map(|f| f.to_string()));
    (dir, index)
}

fn resolve(
    resolver: &dyn ImportResolver,
    index: &ProjectIndex,
    source: &str,
    reference: ImportRef,
) -> Resolution {
    let source_abs = index.root().join(source);
    let ctx = ResolveContext::new(index, &source_abs, source);
    resolver.resolve(&reference, &ctx)
}

fn path(text: &str) -> ImportRef {
    ImportRef::Path(text.to_string())
}

#[test]
fn python_resolves_absolute_and_relative_modules() {
    let (_dir, index) = project(&[
        "pkg/__init__.py",
        "pkg/a.py",
        "pkg/b.py",
        "pkg/sub/__init__.py",
        "pkg/sub/deep.py",
    ]);
    let r = PythonResolver::new();

    assert_eq!(resolve(&r, &index, "pkg/a.py", path("pkg.b")), Resolution::file("pkg/b.py"));
    assert_eq!(resolve(&r, &index, "pkg/a.py", path("pkg.sub")), Resolution::file("pkg/sub/__init__.py"));
    assert_eq!(resolve(&r, &index, "pkg/a.py", path(".b")), Resolution::file("pkg/b.py"));
    assert_eq!(resolve(&r, &index, "pkg/a.py", path(".")), Resolution::file("pkg/__init__.py"));
    assert_eq!(resolve(&r, &index, "pkg/sub/deep.py", path("..b")), Resolution::file("pkg/b.py"));
}

#[test]
fn python_classifies_unresolved_modules() {
    let (_dir, index) = project(&["app/main.py"]);
    let r = PythonResolver::new();

    assert_eq!(resolve(&r, &index, "app/main.py", path("os")), Resolution::External("os".into()));
    assert_eq!(
        resolve(&r, &index, "app/main.py", path("requests.adapters")),
        Resolution::External("requests".into())
    );
    assert_eq!(resolve(&r, &index, "app/main.py", path(".missing")), Resolution::Unresolved);
}

#[test]
fn javascript_probes_extensions_then_index_files() {
    let (_dir, index) = project(&[
        "src/app.ts",
        "src/util.ts",
        "src/util.js",
        "src/components/index.tsx",
        "lib/helper.mjs",
        "src/data.json",
    ]);
    let r = JavaScriptResolver::new();

    // .js is probed before .ts
    assert_eq!(resolve(&r, &index, "src/app.ts", path("./util")), Resolution::file("src/util.js"));
    assert_eq!(
        resolve(&r, &index, "src/app.ts", path("./components")),
        Resolution::file("src/components/index.tsx")
    );
    assert_eq!(
        resolve(&r, &index, "src/app.ts", path("../lib/helper")),
        Resolution::file("lib/helper.mjs")
    );
    assert_eq!(
        resolve(&r, &index, "src/app.ts", path("./data.json?raw")),
        Resolution::file("src/data.json")
    );
    assert_eq!(resolve(&r, &index, "src/app.ts", path("./nope")), Resolution::Unresolved);
}

#[test]
fn javascript_package_names() {
    assert_eq!(package_name("react").as_deref(), Some("react"));
    assert_eq!(package_name("lodash/get").as_deref(), Some("lodash"));
    assert_eq!(package_name("@scope/pkg/deep/path").as_deref(), Some("@scope/pkg"));
    assert_eq!(package_name("/abs/path"), None);
    assert_eq!(package_name("."), None);

    let (_dir, index) = project(&["src/app.ts"]);
    assert_eq!(
        resolve(&JavaScriptResolver::new(), &index, "src/app.ts", path("@scope/pkg/sub")),
        Resolution::External("@scope/pkg".into())
    );
}

#[test]
fn csharp_matches_type_name_against_file_stems() {
    let (_dir, index) = project(&["Ui/Button.cs", "Legacy/button.cs", "App/Program.cs"]);
    let r = CSharpResolver::new();

    assert_eq!(
        resolve(&r, &index, "App/Program.cs", path("Acme.Widgets.Button")),
        Resolution::Resolved(vec!["Legacy/button.cs".into(), "Ui/Button.cs".into()])
    );
    assert_eq!(
        resolve(&r, &index, "App/Program.cs", path("Acme.Widgets.Slider")),
        Resolution::External("Acme.Widgets.Slider".into())
    );
    assert_eq!(
        resolve(&r, &index, "App/Program.cs", path("System.Collections.Generic")),
        Resolution::External("System".into())
    );
}

#[test]
fn csharp_framework_roots_are_configurable() {
    let (_dir, index) = project(&["App/Program.cs"]);
    let index = index.with_csharp_framework_roots(vec!["Acme".into()]);

    assert_eq!(
        resolve(&CSharpResolver::new(), &index, "App/Program.cs", path("Acme.Widgets.Slider")),
        Resolution::External("Acme".into())
    );
    assert_eq!(
        resolve(&CSharpResolver::new(), &index, "App/Program.cs", path("System.Linq")),
        Resolution::External("System.Linq".into())
    );
}

#[test]
fn gdscript_resolves_resource_paths_and_classes() {
    let (_dir, index) = project(&["actors/player.gd", "actors/enemy.gd", "zz/Player.gd", "main.gd"]);
    let r = GDScriptResolver::new();

    assert_eq!(
        resolve(&r, &index, "main.gd", path("res://actors/enemy.gd")),
        Resolution::file("actors/enemy.gd")
    );
    assert_eq!(resolve(&r, &index, "main.gd", path("res://missing.gd")), Resolution::Unresolved);
    assert_eq!(
        resolve(&r, &index, "main.gd", ImportRef::Class("Player".into())),
        Resolution::file("actors/player.gd")
    );
    assert_eq!(
        resolve(&r, &index, "main.gd", ImportRef::Class("Node2D".into())),
        Resolution::Unresolved
    );
}

#[test]
fn go_resolves_local_packages_to_first_non_test_file() {
    let (_dir, index) = project(&[
        "main.go",
        "util/a_test.go",
        "util/helper.go",
        "util/zeta.go",
        "single.go",
    ]);
    let index = index.with_go_module(Some("github.com/acme/proj".into()));
    let r = GoResolver::new();

    assert_eq!(
        resolve(&r, &index, "main.go", path("github.com/acme/proj/util")),
        Resolution::file("util/helper.go")
    );
    assert_eq!(
        resolve(&r, &index, "main.go", path("github.com/acme/proj/single")),
        Resolution::file("single.go")
    );
    assert_eq!(resolve(&r, &index, "main.go", path("github.com/acme/proj/nothing")), Resolution::Unresolved);
    assert_eq!(resolve(&r, &index, "main.go", path("fmt")), Resolution::Unresolved);
    assert_eq!(resolve(&r, &index, "main.go", path("golang.org/x/sync/errgroup")), Resolution::Unresolved);
    assert_eq!(
        resolve(&r, &index, "main.go", path("github.com/acme/project2/pkg")),
        Resolution::External("github.com/acme/project2/pkg".into())
    );
}

#[test]
fn go_external_names() {
    assert_eq!(external_name("github.com/lib/pq"), "github.com/lib/pq");
    assert_eq!(external_name("net/http"), "net");
    assert_eq!(external_name("gopkg.in/yaml.v3"), "gopkg.in/yaml.v3");
}

#[test]
fn rust_crate_paths_drop_trailing_item() {
    let (_dir, index) = project(&["src/lib.rs", "src/shapes.rs", "src/geo/mod.rs", "src/geo/point.rs"]);
    let r = RustResolver::new();

    assert_eq!(
        resolve(&r, &index, "src/lib.rs", path("crate::shapes::Circle")),
        Resolution::file("src/shapes.rs")
    );
    assert_eq!(resolve(&r, &index, "src/lib.rs", path("crate::geo")), Resolution::file("src/geo/mod.rs"));
    assert_eq!(
        resolve(&r, &index, "src/lib.rs", path("crate::geo::point")),
        Resolution::file("src/geo/point.rs")
    );
    assert_eq!(resolve(&r, &index, "src/lib.rs", path("crate::missing::Thing")), Resolution::Unresolved);
    assert_eq!(
        resolve(&r, &index, "src/lib.rs", path("serde::Serialize")),
        Resolution::External("serde".into())
    );
}

#[test]
fn rust_relative_paths_and_mod_declarations() {
    let (_dir, index) = project(&[
        "src/lib.rs",
        "src/geo/mod.rs",
        "src/geo/point.rs",
        "src/geo/shape/mod.rs",
        "src/util.rs",
        "src/util/strings.rs",
        "crates/core/src/lib.rs",
        "crates/core/src/model.rs",
    ]);
    let r = RustResolver::new();

    assert_eq!(
        resolve(&r, &index, "src/geo/point.rs", path("super::util")),
        Resolution::file("src/util.rs")
    );
    assert_eq!(
        resolve(&r, &index, "src/geo/mod.rs", path("self::point::Point")),
        Resolution::file("src/geo/point.rs")
    );
    assert_eq!(
        resolve(&r, &index, "src/lib.rs", ImportRef::Module("geo".into())),
        Resolution::file("src/geo/mod.rs")
    );
    assert_eq!(
        resolve(&r, &index, "src/geo/mod.rs", ImportRef::Module("shape".into())),
        Resolution::file("src/geo/shape/mod.rs")
    );
    assert_eq!(
        resolve(&r, &index, "src/util.rs", ImportRef::Module("strings".into())),
        Resolution::file("src/util/strings.rs")
    );
    assert_eq!(
        resolve(&r, &index, "crates/core/src/lib.rs", path("crate::model::Entity")),
        Resolution::file("crates/core/src/model.rs")
    );
}
