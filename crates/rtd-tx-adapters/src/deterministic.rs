use std::sync::atomic::{AtomicBool, Ordering};

use alloy::primitives::keccak256;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use rtd_tx_core::{PortError, SignedTransaction, SignerPort, TransactionIntent};

/// Local signer for development and tests. The signature is a pure function
/// of the seed and the intent bytes; it is not verifiable on chain.
#[derive(Debug, Default)]
pub struct DeterministicSigner {
    seed: Vec<u8>,
    reject: AtomicBool,
}

impl DeterministicSigner {
    pub fn new(seed: impl Into<Vec<u8>>) -> Self {
        Self {
            seed: seed.into(),
            reject: AtomicBool::new(false),
        }
    }

    /// Makes every following request behave like a user declining in the
    /// wallet.
    pub fn set_rejecting(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    pub fn signature_for(&self, intent: &TransactionIntent) -> Vec<u8> {
        let mut preimage = Vec::with_capacity(self.seed.len() + intent.as_bytes().len());
        preimage.extend_from_slice(&self.seed);
        preimage.extend_from_slice(intent.as_bytes());
        let hash = keccak256(preimage);

        // scheme flag followed by 64 signature bytes
        let mut sig = Vec::with_capacity(65);
        sig.push(0x00);
        sig.extend_from_slice(hash.as_slice());
        sig.extend_from_slice(keccak256(hash).as_slice());
        sig
    }
}

#[async_trait]
impl SignerPort for DeterministicSigner {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(PortError::Rejected("user rejected the request".to_owned()));
        }
        Ok(SignedTransaction {
            bytes: intent.to_base64(),
            signature: STANDARD.encode(self.signature_for(intent)),
        })
    }
}
