use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// The classic creational pattern: one process-wide instance, created on
/// first access. Construction is private, so `instance` is the only way to
/// reach it.
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| Singleton { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::Singleton;

    #[test]
    fn identity_is_stable_across_accesses() {
        let first = Singleton::instance();
        for _ in 0..10 {
            assert!(std::ptr::eq(first, Singleton::instance()));
        }
    }
}
