//! Engine composition: the injected registries behind every resolution call.

use crate::error::{ClassificationError, RegistryError};
use crate::property::{PropertyDefinition, PropertyRegistry};
use crate::resolver::{ResolvedValue, resolve_value};
use style_shorthand::{ShorthandDefinition, ShorthandTable};
use style_tokens::{DimensionToken, TokenRegistry, TokenType, default_registry};
use style_units::{DimensionGroup, UnitDefinition, UnitTable};

/// The style engine: token matchers, unit table, shorthand table, and
/// property grammars composed once at startup.
///
/// Registration methods exist for startup composition; afterwards the
/// engine is read-only and every resolution call is a pure function, so a
/// shared reference can serve any number of concurrent callers.
pub struct StyleEngine {
    tokens: TokenRegistry,
    units: UnitTable,
    shorthands: ShorthandTable,
    properties: PropertyRegistry,
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleEngine {
    /// An engine over the builtin unit set, the standard matcher set, and
    /// the builtin shorthand groups, with no properties registered yet.
    pub fn builtin() -> Self {
        let units = UnitTable::builtin();
        Self {
            tokens: default_registry(units.clone()),
            units,
            shorthands: ShorthandTable::builtin(),
            properties: PropertyRegistry::new(),
        }
    }

    /// Resolve a raw value against a property grammar.
    ///
    /// # Errors
    /// Propagates the resolver's [`ClassificationError`]; see
    /// [`resolve_value`].
    pub fn resolve(
        &self,
        property: &PropertyDefinition,
        raw_value: &str,
    ) -> Result<ResolvedValue, ClassificationError> {
        resolve_value(&self.tokens, property, raw_value)
    }

    /// Look up a registered property grammar.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownProperty`] for an unknown key.
    pub fn property(&self, key: &str) -> Result<&PropertyDefinition, RegistryError> {
        self.properties
            .get(key)
            .ok_or_else(|| RegistryError::UnknownProperty(key.to_owned()))
    }

    /// Register a property grammar (startup composition).
    pub fn register_property(&mut self, definition: PropertyDefinition) {
        self.properties.register(definition);
    }

    /// Register a token type; an existing key is replaced (last writer
    /// wins, startup composition only).
    pub fn register_token_type(&mut self, matcher: Box<dyn TokenType>) {
        self.tokens.register(matcher);
    }

    /// Register a unit symbol and refresh the dimension matcher so the new
    /// symbol participates in classification.
    pub fn register_unit(&mut self, definition: UnitDefinition) {
        self.units.register(definition);
        self.tokens
            .register(Box::new(DimensionToken::new(self.units.clone())));
    }

    /// Register a shorthand group (startup composition).
    pub fn register_shorthand(&mut self, definition: ShorthandDefinition) {
        self.shorthands.register(definition);
    }

    /// Dimension group of a unit symbol, if registered.
    pub fn unit_dimension(&self, symbol: &str) -> Option<DimensionGroup> {
        self.units.dimension(symbol)
    }

    /// Dimension group of a unit symbol, for callers that require one
    /// (e.g. when building dimension control options).
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownUnit`] for an unregistered symbol.
    pub fn require_unit_dimension(&self, symbol: &str) -> Result<DimensionGroup, RegistryError> {
        self.units
            .dimension(symbol)
            .ok_or_else(|| RegistryError::UnknownUnit(symbol.to_owned()))
    }

    /// Look up a registered token type.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTokenType`] for an unknown key.
    pub fn token_type(&self, key: &str) -> Result<&dyn TokenType, RegistryError> {
        self.tokens
            .get(key)
            .ok_or_else(|| RegistryError::UnknownTokenType(key.to_owned()))
    }

    /// The ordered longhand keys a shorthand expands to.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownShorthand`] for an unknown key.
    pub fn expand_shorthand(&self, key: &str) -> Result<&[String], RegistryError> {
        self.shorthands
            .expand(key)
            .ok_or_else(|| RegistryError::UnknownShorthand(key.to_owned()))
    }

    /// The shorthand that owns a longhand key, if any.
    pub fn shorthand_for(&self, longhand: &str) -> Option<&str> {
        self.shorthands.shorthand_for(longhand)
    }
}
