#[macro_export]
macro_rules! string_key {
    ($TypeName: ident) => {
        #[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $TypeName {
            fn from(value: String) -> Self {
                $TypeName(value)
            }
        }

        impl From<&str> for $TypeName {
            fn from(value: &str) -> Self {
                $TypeName(value.to_owned())
            }
        }
    };
}
