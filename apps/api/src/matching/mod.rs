// Text-to-opportunity matching core.
// Pure and request-scoped: nothing in here touches the network, the
// database, or shared mutable state. The skill extractor's inference tier
// is the one async seam, and its failures never leave the module.

pub mod matcher;
pub mod normalize;
pub mod profession;
pub mod skills;
