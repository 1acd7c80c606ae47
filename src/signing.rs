//! Request signatures for the platform API.
//!
//! The platform authenticates server-side calls with
//! `md5(name1=value1name2=value2...secret)` where the names are sorted
//! byte-wise and the `sig` parameter itself is left out. The signature must
//! match byte for byte or the call is rejected.

use std::collections::BTreeMap;

use md5::{Digest, Md5};

/// Name of the query parameter carrying the signature.
pub const SIG_PARAMETER: &str = "sig";

/// Collapse parameters into canonical (sorted, first-value-wins) order.
///
/// `sig` is dropped so an already-signed set can be re-signed.
pub fn canonical_params<'a, I>(params: I) -> BTreeMap<&'a str, &'a str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut canonical = BTreeMap::new();
    for (name, value) in params {
        if name != SIG_PARAMETER {
            canonical.entry(name).or_insert(value);
        }
    }
    canonical
}

/// Compute the lowercase hex signature for `params` with `secret`.
///
/// Input order does not matter.
pub fn sign<'a, I>(params: I, secret: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut hasher = Md5::new();
    for (name, value) in canonical_params(params) {
        hasher.update(name.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "3dad9cbf9baaa0360c0f2ba372d25716";

    fn friends_get() -> Vec<(&'static str, &'static str)> {
        vec![
            ("method", "friends.get"),
            ("app_id", "423004"),
            ("session_key", "be6ef89965d58e56dec21acb9b62bdaa"),
            ("secure", "1"),
        ]
    }

    #[test]
    fn matches_platform_reference_signature() {
        assert_eq!(
            sign(friends_get(), SECRET),
            "4a05af66f80da18b308fa7e536912bae"
        );
    }

    #[test]
    fn input_order_does_not_change_signature() {
        let mut reversed = friends_get();
        reversed.reverse();
        assert_eq!(sign(reversed, SECRET), sign(friends_get(), SECRET));
    }

    #[test]
    fn value_or_secret_change_alters_signature() {
        let baseline = sign(friends_get(), SECRET);

        let mut changed = friends_get();
        changed[3] = ("secure", "0");
        assert_ne!(sign(changed, SECRET), baseline);

        assert_ne!(sign(friends_get(), "another-secret"), baseline);
    }

    #[test]
    fn existing_sig_is_ignored() {
        let mut with_sig = friends_get();
        with_sig.push(("sig", "stale"));
        assert_eq!(sign(with_sig, SECRET), sign(friends_get(), SECRET));
    }

    #[test]
    fn duplicate_names_keep_first_value() {
        let params = vec![("uids", "1"), ("method", "users.get"), ("uids", "2")];
        let canonical = canonical_params(params);
        assert_eq!(canonical.get("uids"), Some(&"1"));
        assert_eq!(canonical.len(), 2);
    }

    #[test]
    fn names_sort_bytewise() {
        // Uppercase sorts before lowercase in byte order.
        let canonical = canonical_params(vec![("b", "1"), ("B", "2"), ("a", "3")]);
        let names: Vec<_> = canonical.keys().copied().collect();
        assert_eq!(names, vec!["B", "a", "b"]);
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let sig = sign(Vec::new(), "");
        // md5 of the empty string
        assert_eq!(sig, "d41d8cd98f00b204e9800998ecf8427e");
    }
}
