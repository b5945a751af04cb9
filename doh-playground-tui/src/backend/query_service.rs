//! 查询服务
//!
//! 在 tokio 运行时上执行查询，结果通过 channel 送回主循环。
//! 主循环是同步的，所以这里只做 spawn 与 try_recv，不阻塞绘制。

use doh_playground_core::{QueryOutcome, QueryParams, QueryPipeline};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct QueryService {
    runtime: Handle,
    pipeline: QueryPipeline,
    tx: UnboundedSender<QueryOutcome>,
    rx: UnboundedReceiver<QueryOutcome>,
}

impl QueryService {
    pub fn new(runtime: Handle, pipeline: QueryPipeline) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            pipeline,
            tx,
            rx,
        }
    }

    /// 发起查询（不取消进行中的查询）
    pub fn spawn(&self, params: QueryParams) {
        let pipeline = self.pipeline.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = pipeline
                .run(&params.domains(), &params.record_types(), params.resolver())
                .await;
            if tx.send(outcome).is_err() {
                log::debug!("Query finished after the UI loop exited");
            }
        });
    }

    /// 取出所有已完成的查询结果
    pub fn drain(&mut self) -> Vec<QueryOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }
}
