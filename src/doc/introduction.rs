/*!
# Introductory Tutorial for TECO

Run the executable with no arguments and you get the command prompt, an
asterisk. Type CTRL-D to leave.
<pre><code>&nbsp;*█
</code></pre>

Stop a running command string with CTRL-C.

TECO reads a whole command string before running any of it. Commands
are single characters, so a command string looks dense. A command string
ends with two ESC characters. Your terminal won't pass ESC through line
editing, so type `$` instead; each `$` becomes an ESC and a line ending
in `$$` runs everything typed since the last prompt.

<pre><code>&nbsp;*2+3=$$
&nbsp;5
</code></pre>

The `=` command prints its argument. Numbers and operators in front of
a command are its argument. Expressions run strictly left to right unless
C-like precedence is turned on.

<pre><code>&nbsp;*5+3*2=$$
&nbsp;16
&nbsp;*2,2E1 5+3*2=$$
&nbsp;11
</code></pre>

Values live in Q-registers named by a letter or digit. `U` stores and
`Q` fetches. `%` adds to a register and returns the new value.

<pre><code>&nbsp;*10UA QA*2=$$
&nbsp;20
</code></pre>

A register also holds text, and text can be run as a macro with `M`.
The `@` modifier lets you choose the text delimiter.

<pre><code>&nbsp;*@^UA/QB*2=/ 21UB MA$$
&nbsp;42
</code></pre>

Loops repeat the commands between `<` and `>`. Conditionals test a
number and run the commands up to `'` only when the test passes.

<pre><code>&nbsp;*0UA 3<%A$ QA=>$$
&nbsp;1
&nbsp;2
&nbsp;3
&nbsp;*-5"L1=|2='$$
&nbsp;1
</code></pre>

Errors print a three letter code and a description. Setting the EH flag
to 1 prints only the code.

<pre><code>&nbsp;*=$$
&nbsp;?NAE No argument before =
</code></pre>

Files given on the command line run as indirect command files. The
first error stops the run and sets a failing exit status.
*/
