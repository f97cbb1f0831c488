pub mod documents;
pub mod enrich;
pub mod fields;
pub mod filter;
pub mod hooks;
pub mod parse;
pub mod registry;
pub mod schema;

pub use documents::{ResolvedTemplate, Template};
pub use enrich::{NodeEnricher, ENRICH_MARKER};
pub use fields::{
    argument_specs, build_fields, ArgumentSpec, AssembleError, FieldArguments, FieldDescriptor,
    NameCollision, FIELD_DESCRIPTION,
};
pub use filter::{filter_top_level, FOOTER_SLUG, HEADER_SLUG, TEMPLATE_PART_TAG};
pub use hooks::{KindOverrideHook, PostBuildHook, PostResolveHook, SchemaHooks};
pub use parse::{ContentParser, JsonContentParser};
pub use registry::{MemoryRegistry, TemplateRegistry};
pub use schema::{
    ResolveError, SchemaAssembler, SchemaOptions, TemplateFieldSchema, DEFAULT_TEMPLATE_KIND,
    ENTRY_FIELD_NAME, OBJECT_TYPE_NAME,
};
