use crate::documents::ResolvedTemplate;
use crate::fields::FieldDescriptor;
use std::collections::BTreeMap;

pub type KindOverrideHook = Box<dyn Fn(&str) -> String + Send + Sync>;
pub type PostResolveHook =
    Box<dyn Fn(ResolvedTemplate, &str, &str) -> ResolvedTemplate + Send + Sync>;
pub type PostBuildHook =
    Box<dyn Fn(BTreeMap<String, FieldDescriptor>) -> BTreeMap<String, FieldDescriptor> + Send + Sync>;

/// Host-registrable extension points, each optional and identity by default:
/// `kind_override` adjusts the kind tag before a fetch, `post_resolve`
/// adjusts the assembled result object (receiving the bound identity and the
/// effective kind) before serialization, and `post_build` adjusts the final
/// name-to-descriptor mapping before schema registration.
#[derive(Default)]
pub struct SchemaHooks {
    pub kind_override: Option<KindOverrideHook>,
    pub post_resolve: Option<PostResolveHook>,
    pub post_build: Option<PostBuildHook>,
}

impl SchemaHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind_override(
        mut self,
        hook: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.kind_override = Some(Box::new(hook));
        self
    }

    pub fn with_post_resolve(
        mut self,
        hook: impl Fn(ResolvedTemplate, &str, &str) -> ResolvedTemplate + Send + Sync + 'static,
    ) -> Self {
        self.post_resolve = Some(Box::new(hook));
        self
    }

    pub fn with_post_build(
        mut self,
        hook: impl Fn(BTreeMap<String, FieldDescriptor>) -> BTreeMap<String, FieldDescriptor>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.post_build = Some(Box::new(hook));
        self
    }
}
