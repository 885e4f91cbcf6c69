use std::fs;
use std::path::{Path, PathBuf};

use table_scaffold::{
    codegen::templates, config::GeneratorConfig, syntax::AnchorKind, workspace::Tree, AppError,
    CodeGenerator, GenerateOptions,
};
use tempfile::{tempdir, TempDir};

const WORKSPACE: &str = r#"{
  "version": 1,
  "projects": {
    "demo": { "root": "", "sourceRoot": "src", "projectType": "application" }
  }
}"#;

const APP_MODULE: &str = "import { NgModule } from '@angular/core';
import { BrowserModule } from '@angular/platform-browser';

import { AppComponent } from './app.component';

@NgModule({
  declarations: [
    AppComponent
  ],
  imports: [
    BrowserModule
  ],
  bootstrap: [AppComponent]
})
export class AppModule { }
";

const USER_DTO: &str = r#"using System;
using System.ComponentModel.DataAnnotations.Schema;

namespace Demo.Models
{
    public class UserDto
    {
        [Column("ID")]
        public long Id { get; set; }

        [Column("Name")]
        public string Name { get; set; }

        [Column("Created")]
        public DateTime CreatedAt { get; set; }
    }
}
"#;

struct Fixture {
    workspace: TempDir,
    _models: TempDir,
    csfile: PathBuf,
}

impl Fixture {
    fn new(model_source: &str) -> Self {
        let workspace = tempdir().unwrap();
        let root = workspace.path();
        fs::write(root.join("angular.json"), WORKSPACE).unwrap();
        fs::create_dir_all(root.join("src/app")).unwrap();
        fs::write(root.join("src/main.ts"), "").unwrap();
        fs::write(root.join("src/app/app.module.ts"), APP_MODULE).unwrap();

        let models = tempdir().unwrap();
        let csfile = models.path().join("UserDto.cs");
        fs::write(&csfile, model_source).unwrap();

        Self {
            workspace,
            _models: models,
            csfile,
        }
    }

    fn root(&self) -> &Path {
        self.workspace.path()
    }

    fn generator(&self) -> CodeGenerator {
        CodeGenerator::new(Tree::new(self.root()), GeneratorConfig::default())
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            name: "user-list".to_string(),
            project: "demo".to_string(),
            csfile: self.csfile.clone(),
            module: None,
            path: None,
        }
    }

    fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root().join(path)).unwrap()
    }
}

#[test]
fn test_full_generation() {
    let fixture = Fixture::new(USER_DTO);
    let report = fixture.generator().generate(&fixture.options()).unwrap();

    assert_eq!(report.context.model_name, "UserDto");
    assert_eq!(report.context.target_folder_path, "src/app/user-list");
    assert_eq!(report.context.module_file_path, "src/app/app.module.ts");
    assert_eq!(report.properties.len(), 3);
    assert_eq!(report.skeleton_files.len(), 4);

    let service = fixture.read("src/app/user-list/user-list-data.service.ts");
    assert!(service.contains(
        "\n\n\t\tstringIndexerHelper.addColumnItem(new ColumnItemStrict('ID', 'id', null, 'id', null, null));\
         \n\t\tstringIndexerHelper.addColumnItem(new ColumnItemStrict('Name', 'name', null, 'name', null, null));\
         \n\t\tstringIndexerHelper.addColumnItem(new ColumnItemStrict('Created', 'createdAt', null, 'createdAt', null, null));\
         \n\t\treturn stringIndexerHelper;"
    ));

    let constants = fixture.read("src/app/user-list/user-list.component.constants.ts");
    assert!(constants.contains(
        "=> {\n\treturn {\
         \n\t\tid: dto.id,\
         \n\t\tname: dto.name,\
         \n\t\tcreatedAt: dto.createdAt ? formatDate(dto.createdAt, 'dd.MM.yyyy', 'ru') : '',\
         \n\t}\n};"
    ));

    let module = fixture.read("src/app/app.module.ts");
    assert!(module.contains(
        "import { AppComponent } from './app.component';\nimport { UserListComponent } from './user-list/user-list.component';"
    ));
    assert!(module.contains("declarations: [\n    AppComponent,\n    UserListComponent\n  ],"));

    assert_eq!(
        fixture.read("src/app/user-list/user-dto.ts"),
        "export interface UserDto {\n\tid: number\n\tname: string\n\tcreatedAt: string\n}"
    );
}

#[test]
fn test_repeated_splices_accumulate() {
    let fixture = Fixture::new(USER_DTO);
    let generator = fixture.generator();
    let report = generator.generate(&fixture.options()).unwrap();

    generator
        .apply_splices(&report.context, &report.properties)
        .unwrap();

    let service = fixture.read("src/app/user-list/user-list-data.service.ts");
    assert_eq!(service.matches("new ColumnItemStrict('ID', 'id'").count(), 2);
    assert_eq!(service.matches("new ColumnItemStrict('Created', 'createdAt'").count(), 2);

    let constants = fixture.read("src/app/user-list/user-list.component.constants.ts");
    assert_eq!(constants.matches("\treturn {").count(), 2);
    assert_eq!(constants.matches("\t\tid: dto.id,").count(), 2);

    // The module declaration is already present and is left alone
    let module = fixture.read("src/app/app.module.ts");
    assert_eq!(module.matches("import { UserListComponent }").count(), 1);

    assert_eq!(
        fixture.read("src/app/user-list/user-dto.ts"),
        "export interface UserDto {\n\tid: number\n\tname: string\n\tcreatedAt: string\n}"
    );
}

#[test]
fn test_rerun_overwrites_skeletons() {
    let fixture = Fixture::new(USER_DTO);
    let generator = fixture.generator();
    generator.generate(&fixture.options()).unwrap();
    generator.generate(&fixture.options()).unwrap();

    let service = fixture.read("src/app/user-list/user-list-data.service.ts");
    assert_eq!(service.matches("new ColumnItemStrict('ID', 'id'").count(), 1);
}

#[test]
fn test_unknown_project_touches_nothing() {
    let fixture = Fixture::new(USER_DTO);
    let mut options = fixture.options();
    options.project = "missing".to_string();

    let err = fixture.generator().generate(&options).unwrap_err();
    assert!(matches!(err, AppError::ProjectNotFound(_)));
    assert!(!fixture.root().join("src/app/user-list").exists());
    assert_eq!(fixture.read("src/app/app.module.ts"), APP_MODULE);
}

#[test]
fn test_unknown_module() {
    let fixture = Fixture::new(USER_DTO);
    let mut options = fixture.options();
    options.module = Some("shared.module".to_string());

    let err = fixture.generator().generate(&options).unwrap_err();
    assert!(matches!(err, AppError::ModuleNotFound(module) if module == "shared.module"));
}

#[test]
fn test_malformed_model_stops_before_materialization() {
    let fixture = Fixture::new("[Column(\"ID\")]\npublic int Id { get; set; }\nprivate int hidden;\n");

    let err = fixture.generator().generate(&fixture.options()).unwrap_err();
    assert!(matches!(err, AppError::MalformedInput { line: 3, .. }));
    assert!(!fixture.root().join("src/app/user-list").exists());
}

#[test]
fn test_missing_model_file() {
    let fixture = Fixture::new(USER_DTO);
    let mut options = fixture.options();
    options.csfile = fixture.root().join("Missing.cs");

    let err = fixture.generator().generate(&options).unwrap_err();
    assert!(matches!(err, AppError::FileNotFound(_)));
}

#[test]
fn test_failed_splice_keeps_earlier_commits() {
    let fixture = Fixture::new(USER_DTO);
    let generator = fixture.generator();
    let context = generator.resolve_context(&fixture.options()).unwrap();
    let properties = table_scaffold::schema::parse_cs_file(&fixture.csfile).unwrap();

    templates::materialize(generator.tree(), &context.target_folder_path, &context.placeholders())
        .unwrap();
    generator
        .tree()
        .overwrite(&context.constants_path(), "export function map() {}\n")
        .unwrap();

    let err = generator.apply_splices(&context, &properties).unwrap_err();
    assert!(matches!(
        err,
        AppError::AnchorNotFound(AnchorKind::FirstArrowFunctionBlockOpenBrace)
    ));

    let service = fixture.read(&context.data_service_path());
    assert!(service.contains("addColumnItem"));
    assert_eq!(fixture.read("src/app/app.module.ts"), APP_MODULE);
    assert!(!fixture.root().join(context.dto_path()).exists());
}

#[test]
fn test_explicit_path() {
    let fixture = Fixture::new(USER_DTO);
    let mut options = fixture.options();
    options.path = Some("src/app/admin".to_string());

    let report = fixture.generator().generate(&options).unwrap();
    assert_eq!(report.context.target_folder_path, "src/app/admin/user-list");

    let module = fixture.read("src/app/app.module.ts");
    assert!(module.contains("from './admin/user-list/user-list.component'"));
}
