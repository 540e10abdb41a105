/// Uuid-backed id newtype. `new()` mints a v4 id; `From<uuid::Uuid>` and
/// `inner()` cover the raw conversions storage adapters need.
#[macro_export]
macro_rules! uuid_key {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $TypeName(uuid::Uuid);

        impl $TypeName {
            pub fn new() -> Self {
                $TypeName(uuid::Uuid::new_v4())
            }

            pub fn inner(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<uuid::Uuid> for $TypeName {
            fn from(id: uuid::Uuid) -> Self {
                $TypeName(id)
            }
        }
    };
}
