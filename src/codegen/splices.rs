// Splice operations applied to the materialized skeletons
//
// Each operation plans its insertions against one snapshot and commits once.
// Running an operation again on an already spliced file appends the
// fragment a second time.

use tracing::info;

use super::context::GenerationContext;
use super::fragments;
use crate::config::FormattingConfig;
use crate::error::AppResult;
use crate::schema::PropertyDescriptor;
use crate::syntax::{locate, AnchorKind, SourceFile};
use crate::workspace::{add_declaration_to_module, relative_import_path, Tree};

/// Register one table column per property in the data service
pub fn update_data_service(
    tree: &Tree,
    context: &GenerationContext,
    properties: &[PropertyDescriptor],
) -> AppResult<()> {
    let path = context.data_service_path();
    info!("Updating file '{}'", path);

    let mut session = tree.begin_update(&path)?;
    let file = SourceFile::parse(session.snapshot())?;
    let offset = locate(&file, AnchorKind::FirstReturnKeyword)?;

    session.insert_right(offset, &fragments::column_registrations(properties))?;
    tree.commit_update(session)
}

/// Fill the row mapping function in the component constants
pub fn update_component_constants(
    tree: &Tree,
    context: &GenerationContext,
    properties: &[PropertyDescriptor],
    formatting: &FormattingConfig,
) -> AppResult<()> {
    let path = context.constants_path();
    info!("Updating file '{}'", path);

    let mut session = tree.begin_update(&path)?;
    let file = SourceFile::parse(session.snapshot())?;
    let offset = locate(&file, AnchorKind::FirstArrowFunctionBlockOpenBrace)?;

    session.insert_right(offset, &fragments::field_mappings(properties, formatting))?;
    tree.commit_update(session)
}

/// Import and declare the generated component in the module file
pub fn update_ng_module(tree: &Tree, context: &GenerationContext) -> AppResult<()> {
    let path = &context.module_file_path;
    let class_name = context.component_class_name();
    info!("Updating file '{}' with {}", path, class_name);

    let mut session = tree.begin_update(path)?;
    let file = SourceFile::parse(session.snapshot())?;
    let import_path = relative_import_path(path, &context.component_path());

    for change in add_declaration_to_module(&file, &class_name, &import_path) {
        session.insert_left(change.pos, &change.text)?;
    }
    tree.commit_update(session)
}

/// Recreate the DTO interface file from scratch
pub fn create_dto(
    tree: &Tree,
    context: &GenerationContext,
    properties: &[PropertyDescriptor],
) -> AppResult<()> {
    let path = context.dto_path();
    info!("Updating file '{}'", path);

    if tree.exists(&path) {
        tree.delete(&path)?;
    }
    tree.create(&path, "")?;

    let mut session = tree.begin_update(&path)?;
    session.insert_left(0, &fragments::dto_interface(&context.model_name, properties))?;
    tree.commit_update(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::error::AppError;
    use crate::schema::DataType;
    use tempfile::tempdir;

    fn context() -> GenerationContext {
        GenerationContext {
            model_name: "UserDto".to_string(),
            component_name: "user-list".to_string(),
            target_folder_path: "src/app/user-list".to_string(),
            module_file_path: "src/app/app.module.ts".to_string(),
        }
    }

    fn properties() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new("id", DataType::Number, "ID"),
            PropertyDescriptor::new("createdAt", DataType::DateTime, "Created"),
        ]
    }

    #[test]
    fn test_data_service_splice() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(
            &ctx.data_service_path(),
            "getColumns() {\n\t\tconst stringIndexerHelper = create();\n\t\treturn stringIndexerHelper;\n\t}",
        )
        .unwrap();

        update_data_service(&tree, &ctx, &properties()).unwrap();

        let text = tree.read(&ctx.data_service_path()).unwrap();
        assert_eq!(
            text,
            "getColumns() {\n\t\tconst stringIndexerHelper = create();\n\
             \n\t\tstringIndexerHelper.addColumnItem(new ColumnItemStrict('ID', 'id', null, 'id', null, null));\
             \n\t\tstringIndexerHelper.addColumnItem(new ColumnItemStrict('Created', 'createdAt', null, 'createdAt', null, null));\
             \n\t\treturn stringIndexerHelper;\n\t}"
        );
    }

    #[test]
    fn test_data_service_without_return() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(&ctx.data_service_path(), "export class X {}").unwrap();

        let err = update_data_service(&tree, &ctx, &properties()).unwrap_err();
        assert!(matches!(err, AppError::AnchorNotFound(AnchorKind::FirstReturnKeyword)));
        assert_eq!(tree.read(&ctx.data_service_path()).unwrap(), "export class X {}");
    }

    #[test]
    fn test_constants_splice() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(&ctx.constants_path(), "export const map = (dto: UserDto): Row => {\n};\n")
            .unwrap();

        let formatting = GeneratorConfig::default().formatting;
        update_component_constants(&tree, &ctx, &properties(), &formatting).unwrap();

        let text = tree.read(&ctx.constants_path()).unwrap();
        assert_eq!(
            text,
            "export const map = (dto: UserDto): Row => {\n\treturn {\
             \n\t\tid: dto.id,\
             \n\t\tcreatedAt: dto.createdAt ? formatDate(dto.createdAt, 'dd.MM.yyyy', 'ru') : '',\
             \n\t}\n};\n"
        );
    }

    #[test]
    fn test_constants_splice_with_generic_return_type() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(
            &ctx.constants_path(),
            "type Fmt = (v: string) => string;\nexport const map = (dto: UserDto): Record<string, unknown> => {\n};\n",
        )
        .unwrap();

        let formatting = GeneratorConfig::default().formatting;
        update_component_constants(&tree, &ctx, &properties()[..1], &formatting).unwrap();

        let text = tree.read(&ctx.constants_path()).unwrap();
        assert_eq!(
            text,
            "type Fmt = (v: string) => string;\n\
             export const map = (dto: UserDto): Record<string, unknown> => {\n\treturn {\
             \n\t\tid: dto.id,\
             \n\t}\n};\n"
        );
    }

    #[test]
    fn test_constants_without_arrow_function() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(&ctx.constants_path(), "export function map(dto) {}").unwrap();

        let formatting = GeneratorConfig::default().formatting;
        let err = update_component_constants(&tree, &ctx, &properties(), &formatting).unwrap_err();
        assert!(matches!(
            err,
            AppError::AnchorNotFound(AnchorKind::FirstArrowFunctionBlockOpenBrace)
        ));
    }

    #[test]
    fn test_missing_target_file() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let err = update_data_service(&tree, &context(), &properties()).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }

    #[test]
    fn test_ng_module_splice() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(
            &ctx.module_file_path,
            "import { NgModule } from '@angular/core';\n\n@NgModule({\n  declarations: []\n})\nexport class AppModule {}\n",
        )
        .unwrap();

        update_ng_module(&tree, &ctx).unwrap();

        let text = tree.read(&ctx.module_file_path).unwrap();
        assert_eq!(
            text,
            "import { NgModule } from '@angular/core';\nimport { UserListComponent } from './user-list/user-list.component';\n\n@NgModule({\n  declarations: [UserListComponent]\n})\nexport class AppModule {}\n"
        );
    }

    #[test]
    fn test_create_dto_replaces_existing() {
        let dir = tempdir().unwrap();
        let tree = Tree::new(dir.path());
        let ctx = context();
        tree.overwrite(&ctx.dto_path(), "stale content").unwrap();

        create_dto(&tree, &ctx, &properties()).unwrap();
        create_dto(&tree, &ctx, &properties()).unwrap();

        assert_eq!(
            tree.read(&ctx.dto_path()).unwrap(),
            "export interface UserDto {\n\tid: number\n\tcreatedAt: string\n}"
        );
    }
}
