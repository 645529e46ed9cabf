//! 调用

use crate::Resolver;
use di_abstractions::CallTarget;
use infrastructure_common::{NamedArguments, ResolveResult, Value};
use tracing::{debug, info};

impl Resolver {
    /// 转换为可调用对象、解析全部参数后调用
    ///
    /// 参数全部解析成功之前不会发起任何调用。
    pub(crate) fn invoke(&self, target: CallTarget, arguments: &NamedArguments) -> ResolveResult<Value> {
        let (_, entry) = self.materialize(target)?;

        let mut context = self.new_context();
        let values = self.resolve_parameters_in(entry.parameters(), arguments, &mut context)?;

        info!("调用: {}", entry.label());
        debug!("{} 的参数数量: {}", entry.label(), values.len());
        entry.invoke(values)
    }
}
