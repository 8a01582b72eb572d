//! Resource types tests only need an envelope for. They start empty and take
//! whatever fields the caller overrides.

use serde_json::{Map, Value};
use stub_core::{Stub, StubModel};

macro_rules! empty_stub {
    ($(#[$meta:meta])* $model:ident, $stub:ident, $resource_name:literal) => {
        $(#[$meta])*
        pub struct $model;

        impl StubModel for $model {
            const RESOURCE_NAME: Option<&'static str> = Some($resource_name);

            fn defaults() -> Map<String, Value> {
                Map::new()
            }
        }

        pub type $stub = Stub<$model>;
    };
}

empty_stub!(
    /// A direct award project (a buyer's saved search and its outcome)
    DirectAwardProject,
    DirectAwardProjectStub,
    "project"
);
empty_stub!(DirectAwardSearch, DirectAwardSearchStub, "search");
empty_stub!(Outcome, OutcomeStub, "outcome");
empty_stub!(User, UserStub, "users");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stub_core::overrides;

    #[test]
    fn test_empty_until_overridden() {
        assert_eq!(UserStub::default().single_result_response(), json!({"users": {}}));

        let outcome = OutcomeStub::new(overrides! { "id" => 100000 });
        assert_eq!(outcome.single_result_response(), json!({"outcome": {"id": 100000}}));
    }
}
