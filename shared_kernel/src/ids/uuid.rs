#[macro_export]
macro_rules! uuid_key {
    ($TypeName: ident) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
        pub struct $TypeName(uuid::Uuid);

        impl $TypeName {
            pub fn new() -> Self {
                $TypeName(uuid::Uuid::new_v4())
            }

            pub fn inner(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl From<uuid::Uuid> for $TypeName {
            fn from(id: uuid::Uuid) -> Self {
                $TypeName(id)
            }
        }
    };
}
