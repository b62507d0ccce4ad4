//! Class, table and key names.

use crate::registry::Inflector;

impl Inflector {
    /// `RawScaledScorer` becomes `raw_scaled_scorers`.
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&self.underscore(class_name))
    }

    /// `egg_and_hams` becomes `EggAndHam`. Anything up to the last `.` is
    /// treated as a schema prefix and dropped.
    pub fn classify(&self, table_name: &str) -> String {
        let name = table_name.rsplit_once('.').map_or(table_name, |(_, name)| name);
        self.camelize(&self.singularize(name))
    }

    /// `Message` becomes `message_id`.
    pub fn foreign_key(&self, class_name: &str) -> String {
        self.foreign_key_with(class_name, true)
    }

    /// `Message` becomes `message_id`, or `messageid` without the separating
    /// underscore.
    pub fn foreign_key_with(&self, class_name: &str, separate_with_underscore: bool) -> String {
        let suffix = if separate_with_underscore { "_id" } else { "id" };
        self.underscore(class_name) + suffix
    }
}
