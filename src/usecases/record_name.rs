use crate::{
    infra::{contracts::NameStore, error::StoreError},
    usecases::contracts::ReplySender,
};

pub fn confirmation(name: &str) -> String {
    format!("Nice to meet you, {name}! Your data stored.")
}

/// Appends the raw name text to the store and, on success only, sends the
/// confirmation reply. The name is taken verbatim: no trimming, no
/// validation, empty string included.
///
/// A store failure propagates to the caller and suppresses the reply; the
/// sender never learns about the lost message beyond the missing
/// confirmation.
pub fn record_name(
    store: &mut dyn NameStore,
    replies: &mut dyn ReplySender,
    chat_id: i64,
    name: &str,
) -> Result<(), StoreError> {
    store.append(name)?;

    let _ = replies.send_reply(chat_id, &confirmation(name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingNameStore, MemoryNameStore, ScriptedGateway};

    #[test]
    fn stores_name_and_confirms() {
        let mut store = MemoryNameStore::default();
        let mut gateway = ScriptedGateway::from(vec![]);

        record_name(&mut store, &mut gateway, 7, "Alice").expect("record should succeed");

        assert_eq!(store.rows, vec!["Alice".to_owned()]);
        assert_eq!(
            gateway.sent,
            vec![(7, "Nice to meet you, Alice! Your data stored.".to_owned())]
        );
    }

    #[test]
    fn stores_name_verbatim_without_trimming() {
        let mut store = MemoryNameStore::default();
        let mut gateway = ScriptedGateway::from(vec![]);

        record_name(&mut store, &mut gateway, 7, "  Bob  ").expect("record should succeed");

        assert_eq!(store.rows, vec!["  Bob  ".to_owned()]);
        assert_eq!(
            gateway.sent,
            vec![(7, "Nice to meet you,   Bob  ! Your data stored.".to_owned())]
        );
    }

    #[test]
    fn accepts_the_empty_string_as_a_name() {
        let mut store = MemoryNameStore::default();
        let mut gateway = ScriptedGateway::from(vec![]);

        record_name(&mut store, &mut gateway, 7, "").expect("record should succeed");

        assert_eq!(store.rows, vec![String::new()]);
        assert_eq!(
            gateway.sent,
            vec![(7, "Nice to meet you, ! Your data stored.".to_owned())]
        );
    }

    #[test]
    fn store_failure_suppresses_the_confirmation() {
        let mut store = FailingNameStore;
        let mut gateway = ScriptedGateway::from(vec![]);

        let result = record_name(&mut store, &mut gateway, 7, "Carol");

        assert!(matches!(result, Err(StoreError::Open { .. })));
        assert!(gateway.sent.is_empty());
    }

    #[test]
    fn succeeds_even_when_the_confirmation_send_fails() {
        struct DeadSender;

        impl ReplySender for DeadSender {
            fn send_reply(&mut self, _chat_id: i64, _text: &str) -> anyhow::Result<()> {
                Err(anyhow::anyhow!("gateway unreachable"))
            }
        }

        let mut store = MemoryNameStore::default();

        record_name(&mut store, &mut DeadSender, 7, "Dave").expect("record should succeed");

        assert_eq!(store.rows, vec!["Dave".to_owned()]);
    }
}
