use crate::app::display::DisplayFormatter;
use crate::core::{EarthquakeEvent, EventView, Pipeline};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// 在背景 task 執行一次抓取流程
pub struct FetchTask;

impl FetchTask {
    pub fn spawn<P>(pipeline: Arc<P>) -> FetchHandle
    where
        P: Pipeline + 'static,
    {
        let (tx, rx) = oneshot::channel();

        let worker = tokio::spawn(async move {
            let event = pipeline.run().await;
            if tx.send(event).is_err() {
                tracing::debug!("Fetch result discarded, display is gone");
            }
        });

        FetchHandle { rx, worker }
    }
}

/// 背景抓取的接收端，丟棄後結果也一併捨棄
pub struct FetchHandle {
    rx: oneshot::Receiver<Option<EarthquakeEvent>>,
    worker: JoinHandle<()>,
}

impl FetchHandle {
    /// 等待背景 task 結束並取回結果
    pub async fn result(self) -> Option<EarthquakeEvent> {
        let FetchHandle { rx, worker } = self;
        let event = match rx.await {
            Ok(event) => event,
            Err(_) => {
                tracing::error!("❌ Fetch task ended without a result");
                None
            }
        };

        if let Err(e) = worker.await {
            tracing::error!("❌ Fetch task failed: {}", e);
        }

        event
    }

    /// 在呼叫端的 task 上把結果交給 `view`；沒有事件時不動畫面
    pub async fn deliver<V: EventView>(
        self,
        view: &mut V,
        formatter: &DisplayFormatter,
    ) -> Result<bool> {
        match self.result().await {
            Some(event) => {
                view.show(&formatter.fields(&event))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}
